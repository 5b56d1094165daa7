//! Error handling module for the xtok CLI.
//!
//! Library failures arrive as [`LexError`] and are wrapped unchanged; the
//! remaining variants cover configuration, output and argument problems.

use thiserror::Error;
use xmltok_lex::LexError;

/// Main error type for the xtok CLI application.
#[derive(Error, Debug)]
pub enum XtokError {
    /// Error when the configuration cannot be loaded or logging cannot start.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an argument or configuration value is invalid.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when loading or tokenizing a document fails.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using XtokError.
pub type Result<T> = std::result::Result<T, XtokError>;
