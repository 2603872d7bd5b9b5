//! API health status

use serde::{Deserialize, Serialize};

/// Response of the API's health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" when the API is up
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
