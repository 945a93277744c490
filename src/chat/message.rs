//! Chat transcript messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::scheme::Scheme;
use crate::classify::response::{QueryResponse, ResponseKind};

/// Who authored a message and how it should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Text entered by the user.
    User,
    /// An informational answer from the assistant.
    Bot,
    /// A scheme suggestion from the assistant.
    Suggestion,
}

/// One entry in a chat transcript.
///
/// Transcripts live in memory for the duration of a session and are never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id.
    pub id: String,
    /// Message kind.
    pub kind: MessageKind,
    /// Message text.
    pub content: String,
    /// Scheme records attached to the message, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<Scheme>,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(kind: MessageKind, content: String, schemes: Vec<Scheme>) -> Self {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            kind,
            content,
            schemes,
            timestamp: Utc::now(),
        }
    }

    /// Create a user message.
    pub fn user<S: Into<String>>(content: S) -> Self {
        ChatMessage::new(MessageKind::User, content.into(), Vec::new())
    }

    /// Create a bot message without attached schemes.
    pub fn bot<S: Into<String>>(content: S) -> Self {
        ChatMessage::new(MessageKind::Bot, content.into(), Vec::new())
    }

    /// Create a suggestion message with attached schemes.
    pub fn suggestion<S: Into<String>>(content: S, schemes: Vec<Scheme>) -> Self {
        ChatMessage::new(MessageKind::Suggestion, content.into(), schemes)
    }
}

impl From<QueryResponse> for ChatMessage {
    fn from(response: QueryResponse) -> Self {
        let kind = match response.kind {
            ResponseKind::Informational => MessageKind::Bot,
            ResponseKind::Suggestion => MessageKind::Suggestion,
        };
        ChatMessage::new(kind, response.text, response.schemes)
    }
}
