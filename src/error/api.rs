//! Errors returned by the API client.

use thiserror::Error;

use crate::traits::HttpError;

/// The three ways an API call can fail.
///
/// Every [`crate::client::ActsClient`] operation either returns a well-formed
/// value or exactly one of these. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response (connect, DNS, timeout, body read).
    #[error("Network error calling '{url}': {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-2xx status. The body is kept verbatim.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The body was not JSON of the expected shape.
    #[error("Decode error: {message}")]
    Decode { message: String },
}

/// Discriminant of [`ApiError`], handy for assertions and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    Network,
    Server,
    Decode,
}

impl ApiError {
    pub(crate) fn network(url: &str, err: &HttpError) -> Self {
        ApiError::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn decode(err: &serde_json::Error) -> Self {
        ApiError::Decode {
            message: err.to_string(),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Network { .. } => ApiErrorKind::Network,
            ApiError::Server { .. } => ApiErrorKind::Server,
            ApiError::Decode { .. } => ApiErrorKind::Decode,
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Server and decode failures read the same to a user: the server was
    /// reached but the action did not go through.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => {
                "Unable to reach the server. Please check your connection and try again."
                    .to_string()
            }
            ApiError::Server { .. } | ApiError::Decode { .. } => {
                "The server could not complete the request. Please try again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "E_API_NETWORK",
            ApiError::Server { .. } => "E_API_SERVER",
            ApiError::Decode { .. } => "E_API_DECODE",
        }
    }

    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
