//! Agent Hub HTTP service: router, state, and handlers.
//!
//! The binary in `main.rs` wires configuration and an agent adapter into
//! [`ServerState`], then serves the router returned by [`router`].

mod dto;
mod error;
mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use agent_hub_llm::Agent;

pub use dto::{HealthStatus, PromptRequest, PromptResponse};
pub use error::AppError;

/// Shared server state accessible from all handlers.
pub struct ServerState {
    /// The agent adapter; read-only after construction and shared across
    /// concurrent requests.
    pub agent: Arc<dyn Agent>,
}

impl ServerState {
    /// Creates state around an agent adapter.
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }
}

/// Builds the application router.
pub fn router(state: Arc<ServerState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let logged_routes = Router::new()
        .route("/api/v1/prompt", post(handlers::prompt::process_prompt))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}
