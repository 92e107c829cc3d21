//! Application error types

use docbase_domain::DomainError;
use thiserror::Error;

use crate::ports::TransportError;

/// Errors returned by the request pipeline and the resource operations.
///
/// An expired session is not an error: it is reported as
/// [`Outcome::SessionExpired`](crate::Outcome::SessionExpired).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The account identifier is empty; nothing was sent.
    #[error("Account ID not found")]
    InvalidAccount,

    /// The service answered with a non-2xx status other than 401.
    #[error("status: {status}, error: {status_text}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// HTTP reason phrase
        status_text: String,
        /// `detail` field of the error body, when the service sent one
        detail: Option<String>,
    },

    /// The request could not be delivered.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A 2xx reply was not valid JSON or did not have the expected shape.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A domain rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// Returns the HTTP status attached to the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the error signals an expired session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::RequestFailed { status: 401, .. })
    }
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        let error = ApiError::RequestFailed {
            status: 404,
            status_text: "Not Found".to_string(),
            detail: None,
        };
        assert_eq!(error.to_string(), "status: 404, error: Not Found");
        assert_eq!(error.status(), Some(404));
        assert!(!error.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_detection() {
        let error = ApiError::RequestFailed {
            status: 401,
            status_text: "Unauthorized".to_string(),
            detail: None,
        };
        assert!(error.is_unauthorized());
        assert!(!ApiError::InvalidAccount.is_unauthorized());
        assert!(!ApiError::Transport(TransportError::Timeout).is_unauthorized());
    }
}
