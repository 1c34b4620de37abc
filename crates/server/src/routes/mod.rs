//! API route handlers
//!
//! - `applications`: catalog create and search
//! - `health`: health checks, readiness, metrics and metadata

pub mod applications;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "appmeta server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "PUT /create",
            "POST /search",
            "GET /health",
            "GET /ready",
            "GET /metrics",
            "GET /metadata"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
