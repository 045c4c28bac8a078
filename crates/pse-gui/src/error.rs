//! GUI-side error type.
//!
//! Iced messages must be `Clone`, so asynchronous completions cannot carry
//! [`pse_api::ApiError`] directly (it wraps non-clonable transport errors).
//! [`FetchError`] is the message-safe projection of the same taxonomy; the
//! conversion happens at the service boundary, right after the request
//! settles.

use pse_api::ApiError;
use thiserror::Error;

/// A failed fetch, as carried inside messages and panel state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The service could not be reached.
    #[error("{0}")]
    Transport(String),

    /// Domain-level rejection reported by the service.
    #[error("{0}")]
    Service(String),

    /// Empty result set where one was expected.
    #[error("{0}")]
    NotFound(String),

    /// The response did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// Whether the service itself rejected the request (as opposed to the
    /// request never arriving).
    #[must_use]
    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Service(_))
    }
}

impl From<ApiError> for FetchError {
    fn from(err: ApiError) -> Self {
        let message = err.user_message();
        match err {
            ApiError::Service { .. } => Self::Service(message),
            ApiError::NotFound(_) => Self::NotFound(message),
            ApiError::Decode(_) => Self::Decode(message),
            // ApiError is non-exhaustive; anything new is transport-like.
            _ => Self::Transport(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_keep_their_message() {
        let err = FetchError::from(ApiError::Service {
            message: "unknown gene \"XYZZY\"".to_string(),
        });
        assert_eq!(err, FetchError::Service("unknown gene \"XYZZY\"".into()));
        assert!(err.is_service_error());
    }

    #[test]
    fn not_found_is_not_a_service_error() {
        let err = FetchError::from(ApiError::NotFound("no structures".to_string()));
        assert!(!err.is_service_error());
    }
}
