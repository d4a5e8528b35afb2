//! Health check endpoint for load balancers and container orchestration.
//!
//! A liveness probe: it only shows that the process can answer HTTP. The
//! request method and body are ignored.

use axum::Json;
use serde::Serialize;

/// Body of the health response, serialized as `{"status":"ok"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Health check handler.
///
/// `Json` sets `Content-Type: application/json`; serializing a fixed
/// single-field struct cannot fail.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serializes_to_fixed_body() {
        let body = serde_json::to_string(&HealthStatus::ok()).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_health_handler_returns_ok_status() {
        let Json(status) = health().await;
        assert_eq!(status, HealthStatus::ok());
    }
}
