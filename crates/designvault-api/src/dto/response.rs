//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted(version_number: i32) -> Self {
        Self {
            success: true,
            message: format!("Version {version_number} deleted successfully"),
        }
    }
}

/// Service info served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub version: String,
    pub endpoints: Endpoints,
}

/// Entry points advertised by [`ServiceInfo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub versions: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// `connected` or `unreachable`.
    pub database: String,
    /// `available` or `unreachable`.
    pub blob_store: String,
}
