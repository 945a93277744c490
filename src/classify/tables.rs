//! Fixed lookup tables for query classification.
//!
//! These tables are plain configuration data, declared as constants so the
//! classifier stays a pure function of its inputs. Order matters everywhere:
//! alias and occupation scans stop at the first hit, and category matches
//! are collected in declaration order.

use crate::catalog::scheme::SchemeCategory;

/// Maximum schemes attached to a category match response.
pub const CATEGORY_MATCH_LIMIT: usize = 6;

/// Maximum schemes attached to an occupation match response.
pub const OCCUPATION_MATCH_LIMIT: usize = 5;

/// Maximum rule-derived additions appended by the recommendation engine.
pub const EXTRA_RECOMMENDATION_LIMIT: usize = 3;

/// Maximum schemes attached to a recommendation query response.
pub const TOP_PICKS_LIMIT: usize = 3;

/// Trigger words that mark a query as asking for recommendations.
pub const RECOMMENDATION_TRIGGERS: &[&str] =
    &["recommend", "suggest", "best", "good", "suitable", "top", "which"];

/// Alias phrases resolving to scheme ids, scanned in order.
///
/// The first phrase contained in the query wins. If the winning phrase's id
/// is absent from the catalog the whole scheme-match rule fails; later
/// aliases are not consulted.
pub const SCHEME_ALIASES: &[(&str, &str)] = &[
    ("kisan credit", "kisan-credit-card"),
    ("kisan", "pm-kisan"),
    ("mudra", "pm-mudra"),
    ("awas", "pmay-gramin"),
    ("ayushman", "ayushman-bharat"),
    ("ujjwala", "pm-ujjwala"),
    ("fasal", "pm-fasal-bima"),
    ("nrega", "mgnrega"),
    ("mgnrega", "mgnrega"),
    ("employment", "mgnrega"),
    ("health insurance", "ayushman-bharat"),
    ("housing", "pmay-gramin"),
    ("forest rights", "forest-rights-act"),
    ("van dhan", "van-dhan-yojana"),
    ("jan dhan", "jan-dhan-yojana"),
    ("jal jeevan", "jal-jeevan-mission"),
    ("swachh", "swachh-bharat-gramin"),
    ("pension", "atal-pension-yojana"),
    ("eklavya", "eklavya-model-schools"),
];

/// Trigger substrings per category, scanned in declaration order.
///
/// Every category with at least one trigger contained in the query is
/// collected; the response attaches schemes of all matched categories.
pub const CATEGORY_TRIGGERS: &[(SchemeCategory, &[&str])] = &[
    (
        SchemeCategory::Agriculture,
        &["farm", "agriculture", "crop", "farming", "kisan", "farmer", "credit card"],
    ),
    (
        SchemeCategory::Health,
        &["health", "medical", "hospital", "treatment", "insurance", "doctor"],
    ),
    (
        SchemeCategory::Employment,
        &["job", "work", "employment", "income", "business", "loan", "wage"],
    ),
    (
        SchemeCategory::Housing,
        &["house", "home", "housing", "shelter", "construction"],
    ),
    (
        SchemeCategory::Education,
        &["education", "school", "study", "learning", "student", "scholarship"],
    ),
    (
        SchemeCategory::Forest,
        &["forest", "tree", "tribal", "jungle", "wood"],
    ),
    (
        SchemeCategory::Digital,
        &["digital", "internet", "computer", "online"],
    ),
    (
        SchemeCategory::Pension,
        &["pension", "old age", "retirement"],
    ),
    (
        SchemeCategory::Water,
        &["water", "jal", "tap", "pipeline", "drinking"],
    ),
    (
        SchemeCategory::Infrastructure,
        &["road", "electricity", "infrastructure"],
    ),
    (
        SchemeCategory::Sanitation,
        &["toilet", "sanitation", "swachh", "hygiene"],
    ),
    (
        SchemeCategory::Energy,
        &["energy", "gas", "fuel", "cooking", "lpg", "solar"],
    ),
    (
        SchemeCategory::Finance,
        &["bank", "account", "finance", "savings"],
    ),
];

/// Scheme ids per occupation tag, scanned in declaration order.
///
/// The first tag contained in the query wins; its ids are resolved against
/// the catalog in the order listed here.
pub const OCCUPATION_SCHEMES: &[(&str, &[&str])] = &[
    (
        "farmer",
        &["pm-kisan", "pm-fasal-bima", "kisan-credit-card", "pm-kisan-fpo"],
    ),
    ("business", &["pm-mudra", "stand-up-india"]),
    ("worker", &["mgnrega", "atal-pension-yojana"]),
    (
        "tribal",
        &["forest-rights-act", "van-dhan-yojana", "eklavya-model-schools"],
    ),
    ("women", &["pm-ujjwala", "stand-up-india"]),
    ("student", &["eklavya-model-schools", "samagra-shiksha"]),
];

/// Broadly applicable scheme ids used as the fallback answer, in order.
pub const TOP_SCHEME_IDS: &[&str] = &[
    "pm-kisan",
    "ayushman-bharat",
    "mgnrega",
    "jan-dhan-yojana",
    "pm-ujjwala",
];
