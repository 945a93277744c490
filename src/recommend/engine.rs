//! Rule-based per-village scheme recommendations.

use std::sync::Arc;

use ahash::AHashSet;
use log::debug;

use crate::catalog::catalog::SchemeCatalog;
use crate::catalog::scheme::{Scheme, SchemeCategory};
use crate::catalog::village::Village;
use crate::classify::tables::EXTRA_RECOMMENDATION_LIMIT;

/// Forest-category schemes are added at or above this forest dependency.
pub const FOREST_DEPENDENCY_MINIMUM: f32 = 70.0;

/// Education schemes are added strictly below this literacy rate.
pub const LITERACY_RATE_MINIMUM: f32 = 60.0;

/// Water schemes are added strictly below this piped-water coverage.
pub const WATER_COVERAGE_MINIMUM: f32 = 60.0;

/// At most this many agriculture schemes are added for farming villages.
pub const AGRICULTURE_EXTRA_LIMIT: usize = 2;

/// Produces ordered scheme recommendations for a village.
///
/// The output is the village's curated scheme list resolved in catalog
/// order, followed by rule-derived additions based on the village's
/// attributes. Recommendation is deterministic and total: the same
/// village and catalog always yield the same list, and unresolved
/// curated ids are dropped silently.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    schemes: Arc<SchemeCatalog>,
}

impl RecommendationEngine {
    /// Create an engine over the given scheme catalog.
    pub fn new(schemes: Arc<SchemeCatalog>) -> Self {
        RecommendationEngine { schemes }
    }

    /// Recommend schemes for a village.
    ///
    /// The base set is the catalog-order resolution of the village's
    /// curated ids. Additions are then evaluated in a fixed rule order,
    /// each rule contributing independently:
    ///
    /// 1. `forest_dependency >= 70` adds all forest-category schemes
    /// 2. `literacy_rate < 60` adds all education-category schemes
    /// 3. `infrastructure.water < 60` adds schemes keyed "water" or "jal"
    /// 4. a farming or agriculture occupation adds up to 2 agriculture
    ///    schemes
    ///
    /// Additions are deduplicated against everything already collected and
    /// the additional list as a whole is truncated to
    /// [`EXTRA_RECOMMENDATION_LIMIT`], so the rules cannot introduce
    /// repeated ids no matter how they overlap.
    pub fn recommend(&self, village: &Village) -> Vec<Scheme> {
        let mut seen: AHashSet<&str> = AHashSet::new();

        let mut base: Vec<&Scheme> = Vec::new();
        for scheme in self.schemes.iter() {
            if village.recommended_schemes.iter().any(|id| id == &scheme.id)
                && seen.insert(scheme.id.as_str())
            {
                base.push(scheme);
            }
        }

        let mut extras: Vec<&Scheme> = Vec::new();

        if village.forest_dependency >= FOREST_DEPENDENCY_MINIMUM {
            self.add_category(SchemeCategory::Forest, usize::MAX, &mut seen, &mut extras);
        }

        if village.literacy_rate < LITERACY_RATE_MINIMUM {
            self.add_category(SchemeCategory::Education, usize::MAX, &mut seen, &mut extras);
        }

        if village.infrastructure.water < WATER_COVERAGE_MINIMUM {
            for scheme in self.schemes.iter() {
                if (scheme.has_keyword("water") || scheme.has_keyword("jal"))
                    && seen.insert(scheme.id.as_str())
                {
                    extras.push(scheme);
                }
            }
        }

        if village.is_farming_community() {
            self.add_category(
                SchemeCategory::Agriculture,
                AGRICULTURE_EXTRA_LIMIT,
                &mut seen,
                &mut extras,
            );
        }

        extras.truncate(EXTRA_RECOMMENDATION_LIMIT);
        debug!(
            "village '{}': {} curated + {} derived recommendations",
            village.id,
            base.len(),
            extras.len()
        );

        base.into_iter().chain(extras).cloned().collect()
    }

    /// Append up to `limit` schemes of `category` that are not yet collected.
    fn add_category<'a>(
        &'a self,
        category: SchemeCategory,
        limit: usize,
        seen: &mut AHashSet<&'a str>,
        extras: &mut Vec<&'a Scheme>,
    ) {
        let mut added = 0;
        for scheme in self.schemes.by_category(category) {
            if added >= limit {
                break;
            }
            if seen.insert(scheme.id.as_str()) {
                extras.push(scheme);
                added += 1;
            }
        }
    }
}
