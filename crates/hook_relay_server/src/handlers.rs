//! Operational HTTP handlers.
//!
//! Webhook dispatch handlers are not defined here — they are compiled per
//! endpoint by `hook_relay_core` and registered by digest in
//! [`crate::routes`].

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests.
    pub status: String,

    /// Gateway version from Cargo.toml.
    pub version: String,

    /// Response time, ISO 8601 UTC.
    pub timestamp: String,
}

/// Health check endpoint (no capability URL required).
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
