use serde::{Deserialize, Serialize};

/// `api` value reported by a working backend.
pub const API_UP: &str = "up";
/// `database` value reported by a working backend.
pub const DATABASE_HEALTHY: &str = "healthy";

/// Response of `GET /health`, a point-in-time snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub api: String,
    pub database: String,
}

impl HealthStatus {
    pub fn api_up(&self) -> bool {
        self.api == API_UP
    }

    pub fn database_healthy(&self) -> bool {
        self.database == DATABASE_HEALTHY
    }

    /// Both components report their expected value. Comparison is exact.
    pub fn is_healthy(&self) -> bool {
        self.api_up() && self.database_healthy()
    }
}
