//! Configuration and input validation errors.

use thiserror::Error;

/// Problems building a client from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base origin is not an http(s) URL.
    #[error("Invalid base URL '{0}': expected an http:// or https:// origin")]
    InvalidBaseUrl(String),

    /// Timeout env var did not parse as whole seconds.
    #[error("Invalid timeout '{value}' in {var}: expected whole seconds")]
    InvalidTimeout { var: &'static str, value: String },

    /// reqwest refused the client configuration.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Comment draft rejected before it reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select an act.")]
    MissingAct,

    #[error("Please enter your comment.")]
    EmptyComment,
}
