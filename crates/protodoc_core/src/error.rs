//! Generator error types.

use thiserror::Error;

/// Errors that can occur while turning a specification into hypertext.
#[derive(Debug, Error)]
pub enum ProtodocError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The specification is structurally malformed.
    #[error("Parse error: {0}")]
    Parse(#[from] protodoc_parser::ParseError),

    /// Template loading or rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtodocError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
