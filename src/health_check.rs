//! Backend health check.
//!
//! "Could not check" and "checked, and it is unhealthy" are different
//! outcomes and are kept apart all the way to the user-facing message.

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::client::ActsClient;
use crate::error::{ApiError, ApiResult};
use crate::models::HealthStatus;
use crate::traits::HttpClient;

/// Interpretation of one `/health` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthReport {
    /// `api == "up"` and `database == "healthy"`.
    Healthy(HealthStatus),
    /// The backend answered, but a component is not in its expected state.
    Unhealthy(HealthStatus),
    /// The check itself failed; nothing is known about the backend.
    Unknown(ApiError),
}

/// Status of a single backend component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentStatus {
    Up,
    Down,
    Unknown,
}

impl HealthReport {
    pub fn from_result(result: ApiResult<HealthStatus>) -> Self {
        match result {
            Ok(status) if status.is_healthy() => HealthReport::Healthy(status),
            Ok(status) => HealthReport::Unhealthy(status),
            Err(err) => HealthReport::Unknown(err),
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthReport::Healthy(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, HealthReport::Unknown(_))
    }

    /// The reported snapshot, if the backend answered.
    pub fn status(&self) -> Option<&HealthStatus> {
        match self {
            HealthReport::Healthy(status) | HealthReport::Unhealthy(status) => Some(status),
            HealthReport::Unknown(_) => None,
        }
    }

    pub fn api_status(&self) -> ComponentStatus {
        match self.status() {
            Some(status) if status.api_up() => ComponentStatus::Up,
            Some(_) => ComponentStatus::Down,
            None => ComponentStatus::Unknown,
        }
    }

    pub fn database_status(&self) -> ComponentStatus {
        match self.status() {
            Some(status) if status.database_healthy() => ComponentStatus::Up,
            Some(_) => ComponentStatus::Down,
            None => ComponentStatus::Unknown,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            HealthReport::Healthy(_) => "System Healthy",
            HealthReport::Unhealthy(_) => "System Issues Detected",
            HealthReport::Unknown(_) => "Health Check Failed",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HealthReport::Healthy(_) => "All services are operating normally.",
            HealthReport::Unhealthy(_) => "Some services may not be functioning properly.",
            HealthReport::Unknown(_) => "Unable to connect to the health monitoring service.",
        }
    }
}

/// Result of one health check run.
#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    pub report: HealthReport,
    /// When the check finished
    pub checked_at: DateTime<Utc>,
    /// Round trip time, only when the backend answered
    pub response_time_ms: Option<u64>,
}

/// Call `/health` once and interpret the answer.
pub async fn run_health_check<C: HttpClient>(client: &ActsClient<C>) -> HealthCheckResult {
    let start = Instant::now();
    let result = client.fetch_health().await;
    let elapsed = start.elapsed().as_millis() as u64;

    let report = HealthReport::from_result(result);
    let response_time_ms = (!report.is_unknown()).then_some(elapsed);

    match &report {
        HealthReport::Healthy(_) => tracing::info!(elapsed_ms = elapsed, "Backend healthy"),
        HealthReport::Unhealthy(status) => tracing::warn!(
            api = %status.api,
            database = %status.database,
            "Backend reported issues"
        ),
        HealthReport::Unknown(err) => tracing::warn!("Health check failed: {}", err),
    }

    HealthCheckResult {
        report,
        checked_at: Utc::now(),
        response_time_ms,
    }
}
