//! Error types for the Sahayak library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SahayakError`] enum. The advisory core itself (classification and
//! recommendation) is total and never fails; errors arise only at the
//! edges, chiefly when loading catalogs.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sahayak operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum SahayakError {
    /// I/O errors (catalog file operations, terminal, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog-related errors (duplicate ids, malformed entries)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Session-related errors (unknown village selection, etc.)
    #[error("Session error: {0}")]
    Session(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SahayakError.
pub type Result<T> = std::result::Result<T, SahayakError>;

impl SahayakError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        SahayakError::Catalog(msg.into())
    }

    /// Create a new session error.
    pub fn session<S: Into<String>>(msg: S) -> Self {
        SahayakError::Session(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SahayakError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SahayakError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SahayakError::Other(format!("Not found: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SahayakError::catalog("Duplicate scheme id");
        assert_eq!(error.to_string(), "Catalog error: Duplicate scheme id");

        let error = SahayakError::session("No village selected");
        assert_eq!(error.to_string(), "Session error: No village selected");

        let error = SahayakError::not_found("village 'xyz'");
        assert_eq!(error.to_string(), "Error: Not found: village 'xyz'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sahayak_error = SahayakError::from(io_error);

        match sahayak_error {
            SahayakError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
