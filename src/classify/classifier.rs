//! Keyword-based query classification.

use std::sync::Arc;

use log::debug;

use crate::catalog::catalog::{SchemeCatalog, VillageCatalog};
use crate::catalog::scheme::{Scheme, SchemeCategory};
use crate::catalog::village::Village;
use crate::classify::response::QueryResponse;
use crate::classify::tables::{
    CATEGORY_MATCH_LIMIT, CATEGORY_TRIGGERS, OCCUPATION_MATCH_LIMIT, OCCUPATION_SCHEMES,
    RECOMMENDATION_TRIGGERS, SCHEME_ALIASES, TOP_PICKS_LIMIT, TOP_SCHEME_IDS,
};
use crate::recommend::engine::RecommendationEngine;

/// Classifies free-text queries against the scheme and village catalogs.
///
/// Classification is a total function: every query produces a response,
/// falling through a strict priority order of rules until the fixed
/// top-schemes fallback. Matching is lowercase substring containment;
/// there is no tokenization, stemming, or spell correction.
///
/// The classifier holds shared references to the catalogs, so calls are
/// cheap, side-effect-free, and re-entrant.
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    schemes: Arc<SchemeCatalog>,
    villages: Arc<VillageCatalog>,
    engine: RecommendationEngine,
}

impl QueryClassifier {
    /// Create a classifier over the given catalogs.
    pub fn new(schemes: Arc<SchemeCatalog>, villages: Arc<VillageCatalog>) -> Self {
        let engine = RecommendationEngine::new(Arc::clone(&schemes));
        QueryClassifier {
            schemes,
            villages,
            engine,
        }
    }

    /// Classify a query and produce a response.
    ///
    /// Rules are evaluated in strict priority order; the first matching
    /// rule wins:
    ///
    /// 1. Exact or alias scheme match
    /// 2. Village match (attaches the village's full recommendation set)
    /// 3. Recommendation intent
    /// 4. Category match
    /// 5. Occupation match
    /// 6. Top-schemes fallback
    ///
    /// `selected_village` is the id of the village currently selected in
    /// the calling shell, if any; it only influences recommendation-intent
    /// queries.
    pub fn classify(&self, query: &str, selected_village: Option<&str>) -> QueryResponse {
        let lower = query.to_lowercase();

        if let Some(scheme) = self.find_scheme(&lower) {
            debug!("query matched scheme '{}'", scheme.id);
            return QueryResponse::informational(
                format!("Here's information about {}:", scheme.name),
                vec![scheme.clone()],
            );
        }

        if let Some(village) = self.find_village(&lower) {
            debug!("query matched village '{}'", village.id);
            let recommendations = self.engine.recommend(village);
            return QueryResponse::suggestion(
                format!("{} information and recommended schemes:", village.name),
                recommendations,
            );
        }

        if RECOMMENDATION_TRIGGERS.iter().any(|t| lower.contains(t)) {
            debug!("query carries recommendation intent");
            return self.handle_recommendation(&lower, selected_village);
        }

        let category_schemes = self.find_by_category(&lower);
        if !category_schemes.is_empty() {
            debug!("query matched {} category schemes", category_schemes.len());
            let mut schemes = category_schemes;
            schemes.truncate(CATEGORY_MATCH_LIMIT);
            return QueryResponse::suggestion("Here are schemes related to your query:", schemes);
        }

        let occupation_schemes = self.find_by_occupation(&lower);
        if !occupation_schemes.is_empty() {
            debug!(
                "query matched {} occupation schemes",
                occupation_schemes.len()
            );
            let mut schemes = occupation_schemes;
            schemes.truncate(OCCUPATION_MATCH_LIMIT);
            return QueryResponse::suggestion(
                "Based on your occupation, here are relevant schemes:",
                schemes,
            );
        }

        debug!("query fell through to the top-schemes fallback");
        QueryResponse::informational(
            "I'm not sure about that specific query. \
             Here are some popular government schemes you might find helpful:",
            self.top_picks(),
        )
    }

    /// Rule 1: direct scheme match by name, id, or keyword, then the alias
    /// table in declaration order.
    fn find_scheme(&self, lower: &str) -> Option<&Scheme> {
        let direct = self.schemes.iter().find(|scheme| {
            lower.contains(&scheme.name.to_lowercase())
                || lower.contains(scheme.id.as_str())
                || scheme
                    .keywords
                    .iter()
                    .any(|keyword| lower.contains(&keyword.to_lowercase()))
        });
        if direct.is_some() {
            return direct;
        }

        // First alias phrase contained in the query wins. An alias pointing
        // at an id missing from the catalog fails the whole rule rather than
        // falling through to later aliases.
        SCHEME_ALIASES
            .iter()
            .find(|(phrase, _)| lower.contains(phrase))
            .and_then(|(_, id)| self.schemes.get(id))
    }

    /// Rule 2: village match by name or id.
    fn find_village(&self, lower: &str) -> Option<&Village> {
        self.villages
            .iter()
            .find(|village| lower.contains(&village.name.to_lowercase()) || lower.contains(village.id.as_str()))
    }

    /// Rule 3: recommendation-intent queries.
    fn handle_recommendation(&self, lower: &str, selected_village: Option<&str>) -> QueryResponse {
        if let Some(village) = selected_village.and_then(|id| self.villages.get(id)) {
            let mut recommendations = self.engine.recommend(village);
            recommendations.truncate(TOP_PICKS_LIMIT);
            return QueryResponse::suggestion(
                format!(
                    "Based on {}'s profile, here are the top recommendations:",
                    village.name
                ),
                recommendations,
            );
        }

        if lower.contains("forest") {
            let schemes: Vec<Scheme> = self
                .schemes
                .iter()
                .filter(|s| {
                    s.category == SchemeCategory::Forest
                        || s.targets_audience("tribal")
                        || s.has_keyword("forest")
                })
                .take(TOP_PICKS_LIMIT)
                .cloned()
                .collect();
            return QueryResponse::suggestion(
                "Top schemes for forest-dependent communities:",
                schemes,
            );
        }

        QueryResponse::suggestion(
            "Here are the top recommended government schemes:",
            self.top_picks(),
        )
    }

    /// Rule 4: all schemes whose category has a trigger contained in the
    /// query, in catalog order. The caller truncates.
    fn find_by_category(&self, lower: &str) -> Vec<Scheme> {
        let matched: Vec<SchemeCategory> = CATEGORY_TRIGGERS
            .iter()
            .filter(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
            .map(|(category, _)| *category)
            .collect();

        if matched.is_empty() {
            return Vec::new();
        }

        self.schemes
            .iter()
            .filter(|s| matched.contains(&s.category))
            .cloned()
            .collect()
    }

    /// Rule 5: the first occupation tag contained in the query, resolved to
    /// its scheme ids in table order. The caller truncates.
    fn find_by_occupation(&self, lower: &str) -> Vec<Scheme> {
        OCCUPATION_SCHEMES
            .iter()
            .find(|(tag, _)| lower.contains(tag))
            .map(|(_, ids)| {
                self.schemes
                    .resolve(ids.iter().copied())
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Rule 6: the fixed top-schemes list, skipping ids absent from the
    /// catalog.
    fn top_picks(&self) -> Vec<Scheme> {
        self.schemes
            .resolve(TOP_SCHEME_IDS.iter().copied())
            .into_iter()
            .cloned()
            .collect()
    }
}
