//! Request middleware: request IDs for log correlation and CORS.
//!
//! `request_id_layer` generates a UUID v4 for each incoming request and
//! creates a tracing span that wraps the entire request lifecycle.
//!
//! `apply_cors` decorates a router so every response carries the configured
//! `Access-Control-Allow-*` headers and preflight requests are answered
//! without reaching the routes.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::{ConfigError, CorsConfig};

/// Extension type for accessing the request ID in handlers if needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Opens the `request` span and logs the status of every response.
///
/// Sits outside `apply_cors`, so preflight replies and 404s for unrouted
/// paths are logged with the CORS headers already attached.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

/// Answers `OPTIONS` with an empty 200 and never calls the routes.
pub async fn preflight_layer(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        tracing::debug!("Answering CORS preflight");
        return StatusCode::OK.into_response();
    }
    next.run(request).await
}

/// Wrap `router` with the CORS headers from `config` and preflight handling.
///
/// The headers are set on every response, including the router's 404
/// fallback and preflight replies. A handler that already set one of them
/// keeps its own value.
pub fn apply_cors(router: Router, config: &CorsConfig) -> Result<Router, ConfigError> {
    let origin = header_value(ACCESS_CONTROL_ALLOW_ORIGIN, &config.allowed_origin)?;
    let methods = header_value(ACCESS_CONTROL_ALLOW_METHODS, &config.methods_header())?;
    let headers = header_value(ACCESS_CONTROL_ALLOW_HEADERS, &config.headers_header())?;

    // Header layers sit outside the preflight layer so its replies get them too
    Ok(router
        .layer(middleware::from_fn(preflight_layer))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            origin,
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            methods,
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            headers,
        )))
}

fn header_value(name: HeaderName, value: &str) -> Result<HeaderValue, ConfigError> {
    HeaderValue::from_str(value).map_err(|_| ConfigError::InvalidHeader {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_accepts_default_origin() {
        let value = header_value(ACCESS_CONTROL_ALLOW_ORIGIN, "http://localhost:5173").unwrap();
        assert_eq!(value, "http://localhost:5173");
    }

    #[test]
    fn test_header_value_rejects_control_characters() {
        let err = header_value(ACCESS_CONTROL_ALLOW_ORIGIN, "http://evil\r\nX-Injected: 1")
            .unwrap_err();
        match err {
            ConfigError::InvalidHeader { name, value } => {
                assert_eq!(name, ACCESS_CONTROL_ALLOW_ORIGIN);
                assert!(value.starts_with("http://evil"));
            }
        }
    }

    #[test]
    fn test_apply_cors_rejects_invalid_config() {
        let config = CorsConfig {
            allowed_headers: vec!["Content-Type\n".to_string()],
            ..CorsConfig::default()
        };
        assert!(apply_cors(Router::new(), &config).is_err());
    }

    #[test]
    fn test_apply_cors_accepts_default_config() {
        assert!(apply_cors(Router::new(), &CorsConfig::default()).is_ok());
    }
}
