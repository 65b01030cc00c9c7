use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub cache: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, cache) = match state.cache.ping().await {
        Ok(()) => ("healthy", "up".to_string()),
        Err(e) => {
            warn!("Cache health check failed: {}", e);
            ("degraded", format!("down: {}", e))
        }
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            service: "employee-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            cache,
        }),
    )
}
