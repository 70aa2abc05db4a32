//! Error types for regina

use thiserror::Error;

/// Main error type for regina operations
#[derive(Debug, Error)]
pub enum ReginaError {
    /// Error in search configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation for current search state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for regina operations
pub type Result<T> = std::result::Result<T, ReginaError>;
