//! auth-api: a health-check HTTP service with CORS support.
//!
//! Exposes `/health` behind a middleware that injects fixed
//! `Access-Control-Allow-*` headers and answers preflight requests.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::{AppConfig, ConfigError, CorsConfig, HttpServerConfig};
pub use self::http::{start_server, ServerError};
pub use routes::create_router;
