use std::time::Duration;
use thiserror::Error;

use crate::config::ConfigError;

/// Error types for a smoke-test run.
///
/// The `Display` text of each variant is exactly what gets printed after
/// `ERROR: ` when a page fails.
#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("HTTP {status} - {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("URL {0}")]
    Transport(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to decode response body as UTF-8: {0}")]
    Decode(String),

    #[error("{0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type specific to sitesmoke operations
pub type SmokeResult<T> = Result<T, SmokeError>;

/// The three failure kinds recognised at the page tester boundary.
///
/// All of them are handled identically downstream; they only differ in how
/// the error line is worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus,
    Transport,
    Other,
}

impl SmokeError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SmokeError::HttpStatus { .. } => FailureKind::HttpStatus,
            SmokeError::Transport(_) => FailureKind::Transport,
            SmokeError::Timeout(_)
            | SmokeError::Decode(_)
            | SmokeError::Unexpected(_)
            | SmokeError::Config(_) => FailureKind::Other,
        }
    }
}
