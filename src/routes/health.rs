//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub credential: String,
    pub cached_collections: u64,
}

/// Liveness probe; always returns OK while the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe; reports credential state and cache occupancy
/// without calling the upstream API.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    let (status, credential) = if state.config.credential.is_missing() {
        ("degraded", "missing")
    } else {
        ("ok", "configured")
    };

    ApiResponse::success(HealthStatus {
        status: status.to_string(),
        credential: credential.to_string(),
        cached_collections: state.cache.entry_count(),
    })
}
