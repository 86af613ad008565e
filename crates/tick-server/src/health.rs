//! Root health endpoint.

use serde::Serialize;

/// Health check response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"Healthy"` when the server is accepting requests.
    pub message: String,
}

/// Build the canonical health response.
pub fn health_check() -> HealthResponse {
    HealthResponse {
        message: "Healthy".into(),
    }
}
