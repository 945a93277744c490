//! Welfare scheme records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of categories a scheme can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeCategory {
    Agriculture,
    Health,
    Employment,
    Housing,
    Education,
    Forest,
    Digital,
    Pension,
    Water,
    Infrastructure,
    Sanitation,
    Energy,
    Finance,
}

impl SchemeCategory {
    /// Get the lowercase name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeCategory::Agriculture => "agriculture",
            SchemeCategory::Health => "health",
            SchemeCategory::Employment => "employment",
            SchemeCategory::Housing => "housing",
            SchemeCategory::Education => "education",
            SchemeCategory::Forest => "forest",
            SchemeCategory::Digital => "digital",
            SchemeCategory::Pension => "pension",
            SchemeCategory::Water => "water",
            SchemeCategory::Infrastructure => "infrastructure",
            SchemeCategory::Sanitation => "sanitation",
            SchemeCategory::Energy => "energy",
            SchemeCategory::Finance => "finance",
        }
    }
}

impl fmt::Display for SchemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SchemeCategory {
    type Err = crate::error::SahayakError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "agriculture" => Ok(SchemeCategory::Agriculture),
            "health" => Ok(SchemeCategory::Health),
            "employment" => Ok(SchemeCategory::Employment),
            "housing" => Ok(SchemeCategory::Housing),
            "education" => Ok(SchemeCategory::Education),
            "forest" => Ok(SchemeCategory::Forest),
            "digital" => Ok(SchemeCategory::Digital),
            "pension" => Ok(SchemeCategory::Pension),
            "water" => Ok(SchemeCategory::Water),
            "infrastructure" => Ok(SchemeCategory::Infrastructure),
            "sanitation" => Ok(SchemeCategory::Sanitation),
            "energy" => Ok(SchemeCategory::Energy),
            "finance" => Ok(SchemeCategory::Finance),
            _ => Err(crate::error::SahayakError::invalid_argument(format!(
                "unknown category '{s}'"
            ))),
        }
    }
}

/// A government welfare scheme.
///
/// Schemes are leaf data: loaded once from the catalog source and never
/// mutated afterwards. Identity is the `id` field, a stable lowercase
/// slug such as `pm-kisan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    /// Unique stable key (e.g. "pm-kisan").
    pub id: String,
    /// Short display name.
    pub name: String,
    /// Official full name.
    pub full_name: String,
    /// The single category this scheme belongs to.
    pub category: SchemeCategory,
    /// One-paragraph description.
    pub description: String,
    /// What the scheme provides.
    pub benefits: Vec<String>,
    /// Who qualifies.
    pub eligibility: Vec<String>,
    /// Audience tags such as "tribal" or "women".
    pub target_audience: Vec<String>,
    /// Free-text trigger tokens used for query matching.
    pub keywords: Vec<String>,
}

impl Scheme {
    /// Check whether this scheme carries the given keyword (exact match).
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Check whether this scheme targets the given audience tag.
    pub fn targets_audience(&self, tag: &str) -> bool {
        self.target_audience.iter().any(|t| t == tag)
    }

    /// Create a builder for constructing schemes.
    pub fn builder<S: Into<String>>(id: S, category: SchemeCategory) -> SchemeBuilder {
        SchemeBuilder::new(id, category)
    }
}

/// A builder for constructing schemes in a fluent manner.
///
/// Mostly useful for tests and embedded catalogs; production data is
/// normally deserialized from JSON by the catalog loader.
#[derive(Debug)]
pub struct SchemeBuilder {
    scheme: Scheme,
}

impl SchemeBuilder {
    /// Create a new builder with the given id and category.
    ///
    /// The display name defaults to the id; the remaining fields start empty.
    pub fn new<S: Into<String>>(id: S, category: SchemeCategory) -> Self {
        let id = id.into();
        SchemeBuilder {
            scheme: Scheme {
                name: id.clone(),
                full_name: String::new(),
                id,
                category,
                description: String::new(),
                benefits: Vec::new(),
                eligibility: Vec::new(),
                target_audience: Vec::new(),
                keywords: Vec::new(),
            },
        }
    }

    /// Set the display name.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.scheme.name = name.into();
        self
    }

    /// Set the official full name.
    pub fn full_name<S: Into<String>>(mut self, full_name: S) -> Self {
        self.scheme.full_name = full_name.into();
        self
    }

    /// Set the description.
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.scheme.description = description.into();
        self
    }

    /// Add a benefit line.
    pub fn benefit<S: Into<String>>(mut self, benefit: S) -> Self {
        self.scheme.benefits.push(benefit.into());
        self
    }

    /// Add an eligibility line.
    pub fn eligibility<S: Into<String>>(mut self, eligibility: S) -> Self {
        self.scheme.eligibility.push(eligibility.into());
        self
    }

    /// Add an audience tag.
    pub fn audience<S: Into<String>>(mut self, tag: S) -> Self {
        self.scheme.target_audience.push(tag.into());
        self
    }

    /// Add a trigger keyword.
    pub fn keyword<S: Into<String>>(mut self, keyword: S) -> Self {
        self.scheme.keywords.push(keyword.into());
        self
    }

    /// Build the final scheme.
    pub fn build(self) -> Scheme {
        self.scheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_builder() {
        let scheme = Scheme::builder("pm-kisan", SchemeCategory::Agriculture)
            .name("PM-KISAN")
            .full_name("Pradhan Mantri Kisan Samman Nidhi")
            .keyword("income support")
            .keyword("kisan samman")
            .audience("farmers")
            .build();

        assert_eq!(scheme.id, "pm-kisan");
        assert_eq!(scheme.name, "PM-KISAN");
        assert_eq!(scheme.category, SchemeCategory::Agriculture);
        assert!(scheme.has_keyword("income support"));
        assert!(!scheme.has_keyword("water"));
        assert!(scheme.targets_audience("farmers"));
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&SchemeCategory::Forest).unwrap();
        assert_eq!(json, "\"forest\"");

        let category: SchemeCategory = serde_json::from_str("\"agriculture\"").unwrap();
        assert_eq!(category, SchemeCategory::Agriculture);
    }

    #[test]
    fn test_category_from_str() {
        let category: SchemeCategory = "sanitation".parse().unwrap();
        assert_eq!(category, SchemeCategory::Sanitation);
        assert_eq!(category.to_string(), "sanitation");

        assert!("plumbing".parse::<SchemeCategory>().is_err());
    }

    #[test]
    fn test_scheme_deserialization_camel_case() {
        let json = r#"{
            "id": "jal-jeevan-mission",
            "name": "Jal Jeevan Mission",
            "fullName": "Jal Jeevan Mission - Har Ghar Jal",
            "category": "water",
            "description": "Tap water for every rural household.",
            "benefits": ["Functional household tap connection"],
            "eligibility": ["All rural households"],
            "targetAudience": ["rural"],
            "keywords": ["water", "jal", "tap"]
        }"#;

        let scheme: Scheme = serde_json::from_str(json).unwrap();
        assert_eq!(scheme.id, "jal-jeevan-mission");
        assert_eq!(scheme.category, SchemeCategory::Water);
        assert!(scheme.has_keyword("jal"));
    }
}
