//! Health check endpoint
//!
//! ```rust,no_run
//! use axum::{Router, routing::get};
//! use contact_relay::{health::health_check, state::AppState};
//!
//! fn routes() -> Router<AppState> {
//!     Router::new().route("/health", get(health_check))
//! }
//! ```

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::state::AppState;

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is up and accepting submissions
    Healthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall status
    pub status: HealthStatus,
    /// Service name
    pub service: String,
    /// Application version
    pub version: String,
    /// Timestamp of health check (Unix epoch)
    pub timestamp: u64,
}

impl HealthCheckResponse {
    /// Create a healthy response
    #[must_use]
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            version: version.into(),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
        }
    }
}

impl IntoResponse for HealthCheckResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Liveness handler
///
/// Reports liveness only; the SMTP relay is not contacted.
#[allow(clippy::unused_async)]
pub async fn health_check(State(state): State<AppState>) -> HealthCheckResponse {
    let identity = state.observability();
    HealthCheckResponse::healthy(&identity.service_name, &identity.version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_response() {
        let response = HealthCheckResponse::healthy("contact-relay", "0.1.0");
        assert!(response.timestamp > 0);
        assert_eq!(response.into_response().status(), StatusCode::OK);
    }

    #[test]
    fn test_status_serialization() {
        let value = serde_json::to_value(HealthStatus::Healthy).unwrap();
        assert_eq!(value, serde_json::json!("healthy"));
    }
}
