//! Error types for actpulse.
//!
//! | Type | Raised by | Meaning |
//! |------|-----------|---------|
//! | [`ApiError`] | [`crate::client::ActsClient`] | Network, server, or decode failure of one call |
//! | [`ConfigError`] | [`crate::config::ClientConfig`] | Bad origin, timeout, or client setup |
//! | [`ValidationError`] | [`crate::submission::CommentDraft`] | Comment rejected before sending |
//!
//! No error is fatal to the process; each is scoped to the action that
//! triggered it.

mod api;
mod config;

pub use api::{ApiError, ApiErrorKind};
pub use config::{ConfigError, ValidationError};

/// Result alias for API client calls.
pub type ApiResult<T> = Result<T, ApiError>;
