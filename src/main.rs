//! auth-api: health-check service.
//!
//! Initializes tracing, builds the fixed configuration and the router, and
//! serves it on 0.0.0.0:8080. The process reads no arguments and no
//! environment. A bind failure is logged and exits with status 1.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth_api::config::{AppConfig, DEFAULT_LOG_FILTER};
use auth_api::{create_router, start_server};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::default();

    let app = match create_router(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Invalid CORS configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        allowed_origin = %config.cors.allowed_origin,
        allowed_methods = %config.cors.methods_header(),
        "CORS enabled"
    );

    match start_server(app, &config.http).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
