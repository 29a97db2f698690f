//! HTTP server entry point.
//!
//! Loads configuration from the environment, constructs the agent adapter,
//! and serves the Agent Hub API until a shutdown signal arrives.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use agent_hub_config::{load_configuration, AgentMode};
use agent_hub_llm::{Agent, AnthropicAgent, StaticAgent};
use agent_hub_server::{router, ServerState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    // Configuration failure is fatal: no partial service availability.
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    info!("Configuration loaded successfully");

    let agent: Arc<dyn Agent> = match config.agent_mode {
        AgentMode::Anthropic => Arc::new(AnthropicAgent::new(config.anthropic.api_key.clone())),
        AgentMode::Static => Arc::new(StaticAgent::new()),
    };
    info!("Agent initialized successfully");

    let state = Arc::new(ServerState::new(agent));
    let app = router(state);

    info!("Starting server on {}", config.http_addr);

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
