//! Error types for the analysis service client.

use thiserror::Error;

/// Errors that can occur while talking to the analysis service or the
/// coordinate archive.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The service could not be reached or the response could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but the payload carried a domain-level `error`
    /// field (unknown gene, malformed mutation string, ...).
    #[error("{message}")]
    Service {
        /// Error text reported by the service.
        message: String,
    },

    /// An empty result set where at least one entry was expected.
    #[error("{0}")]
    NotFound(String),

    /// The payload did not match the expected response shape.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns a user-friendly message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => {
                "Could not reach the analysis service. Check that it is running.".to_string()
            }
            Self::Service { message } => message.clone(),
            Self::NotFound(message) => message.clone(),
            Self::Decode(_) => "The analysis service returned an unexpected response.".to_string(),
        }
    }

    /// Whether this is a domain-level rejection reported by the service.
    #[must_use]
    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Whether this is an empty-result failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
