//! Error types for digit-tally

use thiserror::Error;

/// Result type for digit-tally operations
pub type Result<T> = std::result::Result<T, TallyError>;

/// Errors that can occur while running a tally session
///
/// Bad user input is not represented here: it ends the session instead.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Reading the input or writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from serde JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown output format name
    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}
