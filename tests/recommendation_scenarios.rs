//! Integration tests for the recommendation engine over the bundled catalog

use std::sync::Arc;

use sahayak::catalog::{Village, load_schemes_from_str};
use sahayak::recommend::RecommendationEngine;

const SCHEMES_JSON: &str = include_str!("../data/schemes.json");

fn engine() -> RecommendationEngine {
    let schemes = Arc::new(load_schemes_from_str(SCHEMES_JSON).unwrap());
    RecommendationEngine::new(schemes)
}

fn ids(schemes: &[sahayak::catalog::Scheme]) -> Vec<&str> {
    schemes.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn test_struggling_village_gets_base_plus_three_additions() {
    // Forest, education, and water rules all fire; the additional list is
    // capped at three as a whole, so the water addition never makes it.
    let village = Village::builder("v")
        .forest_dependency(80.0)
        .literacy_rate(50.0)
        .water_coverage(40.0)
        .recommended_scheme("mgnrega")
        .build();

    let result = engine().recommend(&village);
    assert_eq!(
        ids(&result),
        vec![
            "mgnrega",
            "forest-rights-act",
            "van-dhan-yojana",
            "eklavya-model-schools"
        ]
    );
}

#[test]
fn test_well_served_village_gets_only_curated_schemes() {
    let village = Village::builder("v")
        .forest_dependency(20.0)
        .literacy_rate(85.0)
        .water_coverage(90.0)
        .recommended_scheme("ayushman-bharat")
        .recommended_scheme("pm-kisan")
        .build();

    let result = engine().recommend(&village);
    // Catalog order, not the village's list order.
    assert_eq!(ids(&result), vec!["pm-kisan", "ayushman-bharat"]);
}

#[test]
fn test_water_rule_skips_already_curated_scheme() {
    // jal-jeevan-mission is the only water-keyword scheme and is already
    // curated, so the water rule adds nothing.
    let village = Village::builder("v")
        .water_coverage(30.0)
        .recommended_scheme("jal-jeevan-mission")
        .build();

    let result = engine().recommend(&village);
    assert_eq!(ids(&result), vec!["jal-jeevan-mission"]);
}

#[test]
fn test_farming_village_gets_two_agriculture_additions() {
    let village = Village::builder("v")
        .occupation("farming")
        .recommended_scheme("pm-kisan")
        .build();

    let result = engine().recommend(&village);
    // pm-kisan is curated, so the next two agriculture schemes follow.
    assert_eq!(
        ids(&result),
        vec!["pm-kisan", "pm-fasal-bima", "kisan-credit-card"]
    );
}

#[test]
fn test_output_never_contains_duplicates() {
    let village = Village::builder("v")
        .forest_dependency(95.0)
        .literacy_rate(40.0)
        .water_coverage(20.0)
        .occupation("farming")
        .recommended_scheme("forest-rights-act")
        .recommended_scheme("eklavya-model-schools")
        .recommended_scheme("jal-jeevan-mission")
        .build();

    let result = engine().recommend(&village);
    let mut unique: Vec<&str> = ids(&result);
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), result.len());
}
