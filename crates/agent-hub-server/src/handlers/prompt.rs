//! Prompt processing endpoint.

use std::sync::Arc;

use axum::extract::{FromRequest, State};
use axum::Json;
use tracing::info;

use crate::dto::{PromptRequest, PromptResponse};
use crate::error::AppError;
use crate::ServerState;

/// JSON extractor whose rejection is converted into [`AppError`], keeping the
/// all-JSON response contract for malformed bodies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Processes a single prompt and returns the agent's reply.
pub async fn process_prompt(
    State(state): State<Arc<ServerState>>,
    AppJson(request): AppJson<PromptRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    request.validate()?;

    info!(
        "prompt request: {}...",
        request.prompt.get(..50).unwrap_or(&request.prompt)
    );

    let message = state.agent.respond(&request.prompt).await?;

    Ok(Json(PromptResponse { message }))
}
