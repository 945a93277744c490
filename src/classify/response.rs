//! Query response payloads.

use serde::{Deserialize, Serialize};

use crate::catalog::scheme::Scheme;

/// How a response should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// A direct answer to the query.
    Informational,
    /// A set of suggested schemes.
    Suggestion,
}

/// The transient value produced for one user query.
///
/// Responses are never persisted; the caller renders the text and the
/// attached scheme records and drops the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Response kind.
    pub kind: ResponseKind,
    /// Human-readable response text.
    pub text: String,
    /// Zero or more scheme records attached to the response.
    pub schemes: Vec<Scheme>,
}

impl QueryResponse {
    /// Create an informational response.
    pub fn informational<S: Into<String>>(text: S, schemes: Vec<Scheme>) -> Self {
        QueryResponse {
            kind: ResponseKind::Informational,
            text: text.into(),
            schemes,
        }
    }

    /// Create a suggestion response.
    pub fn suggestion<S: Into<String>>(text: S, schemes: Vec<Scheme>) -> Self {
        QueryResponse {
            kind: ResponseKind::Suggestion,
            text: text.into(),
            schemes,
        }
    }

    /// Ids of the attached schemes, in response order.
    pub fn scheme_ids(&self) -> Vec<&str> {
        self.schemes.iter().map(|s| s.id.as_str()).collect()
    }
}
