//! HTTP route handlers for the prompt service.

pub mod prompt;

use axum::Json;

use crate::dto::HealthStatus;

/// Health check endpoint. Reports healthy whenever the process can execute
/// the handler; no upstream dependency checks are performed.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
