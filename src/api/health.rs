//! Health check endpoint shared by every binary

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Name of the responding service
    pub service: String,
    /// Crate version
    pub version: String,
}

/// GET /api/health
pub fn health_router(service: &'static str) -> Router {
    Router::new().route(
        "/api/health",
        get(move || async move {
            Json(HealthResponse {
                status: "healthy".to_string(),
                service: service.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            })
        }),
    )
}
