//! # Scribe API Server
//!
//! The main entry point for the Actix-web HTTP server.

use api_server::telemetry::{TelemetryConfig, init_telemetry};
use api_server::{AppConfig, AppState, BlogServer};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Scribe API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(config.database.as_ref()).await?;

    let server = BlogServer::bind(state, &config.host, config.port, config.workers)?;
    server.wait().await?;

    tracing::info!("Server stopped");
    Ok(())
}
