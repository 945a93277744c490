//! Per-village scheme recommendations.

pub mod engine;

// Re-export commonly used types
pub use engine::{
    AGRICULTURE_EXTRA_LIMIT, FOREST_DEPENDENCY_MINIMUM, LITERACY_RATE_MINIMUM,
    RecommendationEngine, WATER_COVERAGE_MINIMUM,
};
