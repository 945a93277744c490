//! Integration tests for chat sessions over the bundled catalogs

use std::sync::Arc;

use sahayak::catalog::{load_schemes_from_str, load_villages_from_str};
use sahayak::chat::{ChatSession, MessageKind};

const SCHEMES_JSON: &str = include_str!("../data/schemes.json");
const VILLAGES_JSON: &str = include_str!("../data/villages.json");

fn session() -> ChatSession {
    let schemes = Arc::new(load_schemes_from_str(SCHEMES_JSON).unwrap());
    let villages = Arc::new(load_villages_from_str(VILLAGES_JSON).unwrap());
    ChatSession::new(schemes, villages)
}

#[test]
fn test_full_conversation_flow() {
    let mut session = session();

    let reply = session.ask("tell me about mgnrega");
    assert_eq!(reply.kind, MessageKind::Bot);
    assert_eq!(reply.schemes[0].id, "mgnrega");

    session.select_village("bastar").unwrap();
    assert_eq!(session.selected_village(), Some("bastar"));

    let reply = session.ask("which schemes suit us best");
    assert_eq!(reply.kind, MessageKind::Suggestion);
    assert!(reply.content.contains("Bastar"));
    assert_eq!(reply.schemes.len(), 3);

    // welcome + 2 queries with replies + 3 selection messages
    assert_eq!(session.transcript().len(), 8);
}

#[test]
fn test_village_selection_suggestion_matches_engine_output() {
    let mut session = session();
    session.select_village("mayurbhanj").unwrap();

    let suggestion = session
        .transcript()
        .iter()
        .find(|m| m.kind == MessageKind::Suggestion)
        .unwrap();

    // Curated schemes first, in catalog order.
    let ids: Vec<&str> = suggestion.schemes.iter().map(|s| s.id.as_str()).collect();
    assert!(ids.starts_with(&["forest-rights-act", "van-dhan-yojana", "swachh-bharat-gramin"]));
}
