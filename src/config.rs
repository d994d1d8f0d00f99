//! Client configuration.
//!
//! The base origin is process-wide and immutable once a client is built. It
//! is passed in explicitly rather than read from a global so tests can point
//! a client at a mock server.

use std::time::Duration;

use crate::error::ConfigError;

/// Origin the public dashboard talks to.
pub const DEFAULT_BASE_URL: &str = "https://0xarc.ogserver.eu.org";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Overrides the base origin.
pub const ENV_API_URL: &str = "ACTPULSE_API_URL";

/// Overrides the timeout in whole seconds; `0` disables it.
pub const ENV_TIMEOUT_SECS: &str = "ACTPULSE_TIMEOUT_SECS";

/// Configuration for [`crate::client::ActsClient`].
///
/// ```ignore
/// use actpulse::config::ClientConfig;
///
/// let config = ClientConfig::from_env()?
///     .with_base_url("http://localhost:8000")
///     .with_timeout(None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base origin, without a trailing slash once validated
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base origin.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defaults overlaid with `ACTPULSE_API_URL` and `ACTPULSE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
                var: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Check the origin and normalize it.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(&self.base_url)?;
        Ok(self)
    }
}

/// Trim whitespace and trailing slashes; require an http(s) scheme and host.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));

    match host {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(trimmed.to_string())
        }
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}
