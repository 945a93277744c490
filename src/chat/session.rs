//! In-memory chat sessions.
//!
//! A session ties the classifier and recommendation engine to a growing
//! transcript and the currently selected village. State is held in memory
//! only; dropping the session discards the conversation.

use std::sync::Arc;

use log::debug;

use crate::catalog::catalog::{SchemeCatalog, VillageCatalog};
use crate::chat::message::ChatMessage;
use crate::classify::classifier::QueryClassifier;
use crate::error::{Result, SahayakError};
use crate::recommend::engine::RecommendationEngine;

/// Canned prompts a shell can offer to get the conversation going.
pub const DEFAULT_PROMPTS: &[&str] = &[
    "Show me all schemes for my village",
    "I am a farmer, what schemes can I use?",
    "Tell me about health insurance schemes",
    "Which schemes are best for small businesses?",
    "What pension schemes are available?",
];

const WELCOME: &str = "Welcome to the Sahayak assistant! I can help you learn about \
government schemes for rural and forest-dwelling communities. You can ask about \
specific schemes, villages, or get personalized recommendations.";

/// A single-user chat session over the loaded catalogs.
#[derive(Debug)]
pub struct ChatSession {
    villages: Arc<VillageCatalog>,
    classifier: QueryClassifier,
    engine: RecommendationEngine,
    selected_village: Option<String>,
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    /// Create a session and emit the welcome message.
    pub fn new(schemes: Arc<SchemeCatalog>, villages: Arc<VillageCatalog>) -> Self {
        let classifier = QueryClassifier::new(Arc::clone(&schemes), Arc::clone(&villages));
        let engine = RecommendationEngine::new(schemes);
        ChatSession {
            villages,
            classifier,
            engine,
            selected_village: None,
            transcript: vec![ChatMessage::bot(WELCOME)],
        }
    }

    /// Submit a user query and return the assistant's reply.
    ///
    /// Appends the user message and the classified response to the
    /// transcript.
    pub fn ask(&mut self, query: &str) -> &ChatMessage {
        debug!("session query: {query}");
        self.transcript.push(ChatMessage::user(query));

        let response = self
            .classifier
            .classify(query, self.selected_village.as_deref());
        self.transcript.push(ChatMessage::from(response));
        self.transcript.last().unwrap()
    }

    /// Select a village and emit its recommendations and profile.
    ///
    /// Fails if the id does not resolve against the village catalog; the
    /// previous selection is kept in that case.
    pub fn select_village(&mut self, village_id: &str) -> Result<()> {
        let village = self
            .villages
            .get(village_id)
            .ok_or_else(|| SahayakError::session(format!("unknown village '{village_id}'")))?;

        self.transcript
            .push(ChatMessage::user(format!("Selected village: {}", village.name)));

        let recommendations = self.engine.recommend(village);
        self.transcript.push(ChatMessage::suggestion(
            format!(
                "Based on {}'s profile ({}% tribal population, {}% forest dependency), \
                 here are the recommended schemes:",
                village.name, village.tribal_population, village.forest_dependency
            ),
            recommendations,
        ));

        self.transcript.push(ChatMessage::bot(format!(
            "{} is located in {}, {} with {} residents. Main occupations include {}. \
             The village faces challenges like {}.",
            village.name,
            village.district,
            village.state,
            village.population,
            village.main_occupation.join(", "),
            village.challenges.join(", ")
        )));

        self.selected_village = Some(village.id.clone());
        Ok(())
    }

    /// The currently selected village id, if any.
    pub fn selected_village(&self) -> Option<&str> {
        self.selected_village.as_deref()
    }

    /// The full transcript, oldest first.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::scheme::{Scheme, SchemeCategory};
    use crate::catalog::village::Village;
    use crate::chat::message::MessageKind;

    fn session() -> ChatSession {
        let schemes = Arc::new(
            SchemeCatalog::new(vec![
                Scheme::builder("pm-kisan", SchemeCategory::Agriculture)
                    .name("PM-KISAN")
                    .build(),
                Scheme::builder("mgnrega", SchemeCategory::Employment)
                    .name("MGNREGA")
                    .build(),
            ])
            .unwrap(),
        );
        let villages = Arc::new(
            VillageCatalog::new(vec![
                Village::builder("khandwa")
                    .name("Khandwa")
                    .location("Madhya Pradesh", "Khandwa")
                    .occupation("farming")
                    .challenge("Water scarcity")
                    .recommended_scheme("mgnrega")
                    .build(),
            ])
            .unwrap(),
        );
        ChatSession::new(schemes, villages)
    }

    #[test]
    fn test_session_starts_with_welcome() {
        let session = session();
        let transcript = session.transcript();

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].kind, MessageKind::Bot);
        assert!(transcript[0].content.contains("Welcome"));
    }

    #[test]
    fn test_ask_appends_user_and_reply() {
        let mut session = session();
        let reply = session.ask("pm-kisan");

        assert_eq!(reply.kind, MessageKind::Bot);
        assert_eq!(reply.schemes.len(), 1);

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].kind, MessageKind::User);
        assert_eq!(transcript[1].content, "pm-kisan");
    }

    #[test]
    fn test_select_village_emits_profile_messages() {
        let mut session = session();
        session.select_village("khandwa").unwrap();

        assert_eq!(session.selected_village(), Some("khandwa"));

        let transcript = session.transcript();
        // welcome + selection echo + suggestion + profile
        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript[2].kind, MessageKind::Suggestion);
        assert_eq!(transcript[2].schemes[0].id, "mgnrega");
        assert!(transcript[3].content.contains("Madhya Pradesh"));
    }

    #[test]
    fn test_select_unknown_village_fails_and_keeps_selection() {
        let mut session = session();
        session.select_village("khandwa").unwrap();

        assert!(session.select_village("nowhere").is_err());
        assert_eq!(session.selected_village(), Some("khandwa"));
    }

    #[test]
    fn test_selected_village_steers_recommendation_queries() {
        let mut session = session();
        session.select_village("khandwa").unwrap();

        let reply = session.ask("what do you recommend");
        assert_eq!(reply.kind, MessageKind::Suggestion);
        assert!(reply.content.contains("Khandwa"));
    }
}
