use anyhow::Result;
use common::config::AppConfig;
use common::telemetry::{init_telemetry, shutdown_telemetry, TelemetryConfig};

mod handlers;
mod routes;
mod state;

use state::AppState;

const SERVICE_NAME: &str = "employee-service";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;

    init_telemetry(TelemetryConfig::from_settings(SERVICE_NAME, &config.telemetry))
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Starting Employee Service...");
    tracing::info!(
        "Distributed tracing: {}",
        if config.telemetry.enable_jaeger { "enabled" } else { "disabled" }
    );

    tracing::info!("Configuration:");
    tracing::info!("  Bind address: {}", config.server.bind_addr());
    tracing::info!("  Request timeout: {} seconds", config.server.request_timeout_secs);
    tracing::info!("  Cache backend: {:?}", config.cache.backend);
    tracing::info!("  Redis URL: {}", config.cache.redis_url);

    // Initialize application state
    let state = AppState::new(&config).await?;

    // Build router
    let app = routes::create_router(state, config.server.request_timeout());

    // Start server
    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("Employee service listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    // Shutdown telemetry gracefully
    shutdown_telemetry();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
