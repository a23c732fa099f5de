//! Error types for the Vitrine core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Vitrine.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Profile content failed to deserialize.
    #[error("Profile parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Profile content deserialized but is unusable.
    #[error("Invalid profile: {message}")]
    Invalid { message: String },
}

impl CoreError {
    /// Create a new invalid-profile error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
