//! Village profile records.

use serde::{Deserialize, Serialize};

/// Basic infrastructure coverage for a village.
///
/// Coverage values are percentages in the 0-100 range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infrastructure {
    /// Household electricity coverage (0-100).
    pub electricity: f32,
    /// Piped water coverage (0-100).
    pub water: f32,
    /// All-weather road coverage (0-100).
    pub roads: f32,
    /// Whether the village has a school.
    pub school: bool,
    /// Whether the village has a health center.
    pub health_center: bool,
}

/// A village profile.
///
/// Like schemes, villages are leaf data loaded once and never mutated.
/// Identity is the `id` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Village {
    /// Unique stable key (e.g. "khandwa").
    pub id: String,
    /// Display name.
    pub name: String,
    /// State the village belongs to.
    pub state: String,
    /// District the village belongs to.
    pub district: String,
    /// Total population.
    pub population: u32,
    /// Number of households.
    pub households: u32,
    /// Literacy rate percentage (0-100).
    pub literacy_rate: f32,
    /// Share of livelihoods depending on forest produce (0-100).
    pub forest_dependency: f32,
    /// Occupation tags such as "farming" or "forestry".
    pub main_occupation: Vec<String>,
    /// Tribal population percentage (0-100).
    pub tribal_population: f32,
    /// Infrastructure coverage record.
    pub infrastructure: Infrastructure,
    /// Known local challenges, in display order.
    pub challenges: Vec<String>,
    /// Curated scheme ids recommended for this village.
    ///
    /// Ids that do not resolve against the scheme catalog are silently
    /// dropped by the recommendation engine, not treated as errors.
    pub recommended_schemes: Vec<String>,
    /// One-paragraph description.
    pub description: String,
}

impl Village {
    /// Check whether the village carries the given occupation tag.
    pub fn has_occupation(&self, tag: &str) -> bool {
        self.main_occupation.iter().any(|o| o == tag)
    }

    /// Whether the village economy is primarily agricultural.
    pub fn is_farming_community(&self) -> bool {
        self.has_occupation("farming") || self.has_occupation("agriculture")
    }

    /// Create a builder for constructing villages.
    pub fn builder<S: Into<String>>(id: S) -> VillageBuilder {
        VillageBuilder::new(id)
    }
}

/// A builder for constructing villages in a fluent manner.
#[derive(Debug)]
pub struct VillageBuilder {
    village: Village,
}

impl VillageBuilder {
    /// Create a new builder with the given id.
    ///
    /// Numeric attributes default to full coverage so that tests only need
    /// to set the attribute a rule under test actually reads.
    pub fn new<S: Into<String>>(id: S) -> Self {
        let id = id.into();
        VillageBuilder {
            village: Village {
                name: id.clone(),
                id,
                state: String::new(),
                district: String::new(),
                population: 0,
                households: 0,
                literacy_rate: 100.0,
                forest_dependency: 0.0,
                main_occupation: Vec::new(),
                tribal_population: 0.0,
                infrastructure: Infrastructure {
                    electricity: 100.0,
                    water: 100.0,
                    roads: 100.0,
                    school: true,
                    health_center: true,
                },
                challenges: Vec::new(),
                recommended_schemes: Vec::new(),
                description: String::new(),
            },
        }
    }

    /// Set the display name.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.village.name = name.into();
        self
    }

    /// Set state and district.
    pub fn location<S: Into<String>, D: Into<String>>(mut self, state: S, district: D) -> Self {
        self.village.state = state.into();
        self.village.district = district.into();
        self
    }

    /// Set population and household counts.
    pub fn size(mut self, population: u32, households: u32) -> Self {
        self.village.population = population;
        self.village.households = households;
        self
    }

    /// Set the literacy rate percentage.
    pub fn literacy_rate(mut self, rate: f32) -> Self {
        self.village.literacy_rate = rate;
        self
    }

    /// Set the forest dependency percentage.
    pub fn forest_dependency(mut self, dependency: f32) -> Self {
        self.village.forest_dependency = dependency;
        self
    }

    /// Set the tribal population percentage.
    pub fn tribal_population(mut self, share: f32) -> Self {
        self.village.tribal_population = share;
        self
    }

    /// Add an occupation tag.
    pub fn occupation<S: Into<String>>(mut self, tag: S) -> Self {
        self.village.main_occupation.push(tag.into());
        self
    }

    /// Set piped water coverage.
    pub fn water_coverage(mut self, coverage: f32) -> Self {
        self.village.infrastructure.water = coverage;
        self
    }

    /// Set the full infrastructure record.
    pub fn infrastructure(mut self, infrastructure: Infrastructure) -> Self {
        self.village.infrastructure = infrastructure;
        self
    }

    /// Add a challenge line.
    pub fn challenge<S: Into<String>>(mut self, challenge: S) -> Self {
        self.village.challenges.push(challenge.into());
        self
    }

    /// Add a curated scheme id.
    pub fn recommended_scheme<S: Into<String>>(mut self, scheme_id: S) -> Self {
        self.village.recommended_schemes.push(scheme_id.into());
        self
    }

    /// Set the description.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.village.description = description.into();
        self
    }

    /// Build the final village.
    pub fn build(self) -> Village {
        self.village
    }
}
