//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use api_server::config::AppConfig;
use api_server::server;
use api_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!("Starting Blog API Server on {}", config.bind_address());

    let running = server::run_server(&config)
        .await
        .map_err(std::io::Error::other)?;

    // actix handles SIGINT/SIGTERM and stops gracefully
    running.wait().await.map_err(std::io::Error::other)
}
