//! Query classification.
//!
//! This module turns free-text questions into responses by matching the
//! query against the scheme and village catalogs through a fixed priority
//! of keyword rules. There is no natural-language understanding; every
//! rule is lowercase substring containment against declared tables.

pub mod classifier;
pub mod response;
pub mod tables;

// Re-export commonly used types
pub use classifier::QueryClassifier;
pub use response::{QueryResponse, ResponseKind};
pub use tables::{
    CATEGORY_MATCH_LIMIT, EXTRA_RECOMMENDATION_LIMIT, OCCUPATION_MATCH_LIMIT, TOP_PICKS_LIMIT,
};
