//! Service info and health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::response::{Endpoints, HealthResponse, ServiceInfo};
use crate::state::AppState;

/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "running".to_string(),
        service: "DesignVault version control".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            health: "/health".to_string(),
            versions: "/api/versions".to_string(),
        },
    })
}

/// GET /health
pub async fn liveness() -> &'static str {
    "OK"
}

/// GET /api/health
///
/// Answers 503 when either backing store is unreachable.
pub async fn health_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let health = state.version_service.health().await;

    let status = if health.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: if health.is_healthy() { "ok" } else { "degraded" }.to_string(),
        database: if health.database {
            "connected"
        } else {
            "unreachable"
        }
        .to_string(),
        blob_store: if health.blob_store {
            "available"
        } else {
            "unreachable"
        }
        .to_string(),
    };

    (status, Json(body))
}
