//! Chat session layer.
//!
//! Holds the in-memory conversation state a shell needs: the transcript,
//! the selected village, and the canned prompts. Rendering and input
//! handling stay with the shell.

pub mod message;
pub mod session;

// Re-export commonly used types
pub use message::{ChatMessage, MessageKind};
pub use session::{ChatSession, DEFAULT_PROMPTS};
