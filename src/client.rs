//! API client for the legislative-comment backend.
//!
//! Four independent, stateless calls, one per endpoint. Nothing is cached,
//! retried, or batched; each call is one request and one response.

use serde::de::DeserializeOwned;

use crate::adapters::ReqwestHttpClient;
use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{ApiError, ApiResult, ConfigError};
use crate::models::{ActDetails, ActName, Comment, CommentResponse, HealthStatus};
use crate::traits::{Headers, HttpClient, Response};

/// Client for the `/acts`, `/fetch`, `/add` and `/health` endpoints.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent calls.
#[derive(Debug, Clone)]
pub struct ActsClient<C = ReqwestHttpClient> {
    base_url: String,
    http: C,
    headers: Headers,
}

impl ActsClient<ReqwestHttpClient> {
    /// Build a reqwest-backed client from validated configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = match config.timeout {
            Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
            None => ReqwestHttpClient::new(),
        };
        Ok(Self::with_http_client(base_url, http))
    }

    /// Reqwest-backed client with no timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> ActsClient<C> {
    /// Client over any [`HttpClient`]. Trailing slashes on the origin are dropped.
    pub fn with_http_client(base_url: impl Into<String>, http: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            base_url,
            http,
            headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// `POST /add`: submit a comment, get it back annotated with a sentiment.
    ///
    /// The contract allows several annotated comments in the reply; normal
    /// use yields one. Only `comment` and `act` go on the wire.
    pub async fn submit_comment(&self, comment: &Comment) -> ApiResult<Vec<CommentResponse>> {
        let url = self.url("/add");
        let body = serde_json::json!({
            "comment": comment.comment,
            "act": comment.act,
        });

        tracing::debug!(method = "POST", %url, act = %comment.act, "Submitting comment");
        let result = self.http.post(&url, &body.to_string(), &self.headers).await;
        self.finish(&url, result)
    }

    /// `GET /health`.
    ///
    /// A failure here means the status is unknown, not that the backend is
    /// unhealthy. See [`crate::health_check`].
    pub async fn fetch_health(&self) -> ApiResult<HealthStatus> {
        let url = self.url("/health");
        self.get_json(&url).await
    }

    /// `GET /fetch?act=<act>` with the act name percent-encoded.
    ///
    /// An act the server does not know surfaces as [`ApiError::Server`].
    pub async fn fetch_act_details(&self, act: &str) -> ApiResult<ActDetails> {
        let url = self.act_details_url(act);
        self.get_json(&url).await
    }

    /// `GET /acts`, in server order with no sorting or deduplication.
    pub async fn list_acts(&self) -> ApiResult<Vec<ActName>> {
        let url = self.url("/acts");
        self.get_json(&url).await
    }

    /// URL for an act's details. Everything outside the RFC 3986 unreserved
    /// set is escaped, so ` `, `&`, `#`, `%` and non-ASCII round-trip.
    pub fn act_details_url(&self, act: &str) -> String {
        format!("{}/fetch?act={}", self.base_url, urlencoding::encode(act))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        tracing::debug!(method = "GET", %url, "Sending request");
        let result = self.http.get(url, &self.headers).await;
        self.finish(url, result)
    }

    fn finish<T: DeserializeOwned>(
        &self,
        url: &str,
        result: Result<Response, crate::traits::HttpError>,
    ) -> ApiResult<T> {
        let outcome = result
            .map_err(|e| ApiError::network(url, &e))
            .and_then(|response| parse_response(&response));

        if let Err(ref err) = outcome {
            tracing::warn!(error_code = err.error_code(), %url, "Request failed: {}", err);
        }
        outcome
    }
}

/// Map a received response to a value: non-2xx is a server error with the
/// body kept as an opaque message, anything else must decode as `T`.
fn parse_response<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    if !response.is_success() {
        return Err(ApiError::Server {
            status: response.status,
            message: response.text_lossy(),
        });
    }
    response.json().map_err(|e| ApiError::decode(&e))
}
