use std::time::Duration;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Router,
};
use common::metrics;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    match metrics::gather_metrics() {
        Ok(metrics) => (StatusCode::OK, metrics),
        Err(e) => {
            tracing::error!("Failed to gather metrics: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, String::from("Failed to gather metrics"))
        }
    }
}

/// Build the router. Requests running past `request_timeout` get 408.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(metrics_handler))

        // Employees
        .route(
            "/api/v1/employees",
            get(handlers::list_employees::list_employees_handler)
                .post(handlers::create_employee::create_employee_handler),
        )
        .route("/api/v1/employees/:id", get(handlers::get_employee::get_employee_handler))

        // Cache administration
        .route(
            "/api/v1/cache/employees/:id",
            delete(handlers::evict_cached_employee::evict_cached_employee_handler),
        )

        // Middleware
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
