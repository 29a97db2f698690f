//! Data transfer objects for HTTP message serialization.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Request body for the prompt endpoint.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    /// The prompt text to process.
    pub prompt: String,
}

impl PromptRequest {
    /// Enforces the non-empty invariant before any agent call runs.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.prompt.is_empty() {
            return Err(AppError::Validation(
                "prompt must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Response body for the prompt endpoint.
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    /// The agent's final reply.
    pub message: String,
}

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    /// The fixed payload reported whenever the process is reachable.
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}
