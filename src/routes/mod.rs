//! HTTP routes.
//!
//! The router is built once from `AppConfig` and never mutated afterwards.
//! Unknown paths fall through to axum's default 404, which still passes
//! through the CORS and request ID layers.

pub mod health;

use axum::{middleware, routing::any, Router};

use crate::config::{AppConfig, ConfigError, HEALTH_PATH};
use crate::middleware::{apply_cors, request_id_layer};

/// Creates the router with all routes and middleware.
pub fn create_router(config: &AppConfig) -> Result<Router, ConfigError> {
    // No method filtering on the health check
    let routes = Router::new().route(HEALTH_PATH, any(health::health));

    let router = apply_cors(routes, &config.cors)?
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer));

    Ok(router)
}
