//! Anthropic Messages API client for the delegating agent.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use agent_hub_core::{Message, MessageRole, UpstreamError};

use crate::Agent;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Model used for all prompt processing.
const ANTHROPIC_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Maximum tokens requested per reply.
const MAX_TOKENS: u32 = 8192;

/// Per-call timeout for provider requests. There is no retry: a call that
/// times out surfaces as an upstream error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<AnthropicMessage>,
}

/// A content block in the reply. Blocks without text (tool use and the like)
/// carry no payload here since no tools are registered.
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: Option<u32>,
    output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

/// Builds the one-turn conversation sent upstream.
fn build_transcript(prompt: &str) -> Vec<Message> {
    vec![Message::user(prompt)]
}

fn to_wire(messages: &[Message]) -> Vec<AnthropicMessage> {
    messages
        .iter()
        .map(|msg| AnthropicMessage {
            role: match msg.role {
                MessageRole::User => "user",
                MessageRole::Assistant => "assistant",
            },
            content: msg.content.clone(),
        })
        .collect()
}

/// Coerces the reply's content blocks into the final message string.
fn extract_reply(content: Vec<ContentBlock>) -> Result<String, UpstreamError> {
    let reply = content
        .into_iter()
        .filter_map(|block| block.text)
        .collect::<Vec<_>>()
        .join("");

    if reply.is_empty() {
        return Err(UpstreamError::EmptyReply);
    }
    Ok(reply)
}

/// Agent backed by the Anthropic Messages API with no tools attached.
pub struct AnthropicAgent {
    client: Client,
    model: String,
    api_key: String,
}

impl AnthropicAgent {
    /// Creates a new agent for the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, ANTHROPIC_MODEL)
    }

    /// Creates a new agent for a specific model.
    pub fn with_model(api_key: impl Into<String>, model: &str) -> Self {
        Self {
            client: Client::new(),
            model: model.to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Agent for AnthropicAgent {
    async fn respond(&self, prompt: &str) -> Result<String, UpstreamError> {
        let start = std::time::Instant::now();

        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: to_wire(&build_transcript(prompt)),
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .timeout(REQUEST_TIMEOUT)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api { status, body });
        }

        let resp: MessagesResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        let reply = extract_reply(resp.content)?;

        info!(
            "Anthropic: {}ms, tokens: {}/{}, content: {} chars",
            start.elapsed().as_millis(),
            resp.usage.input_tokens.unwrap_or(0),
            resp.usage.output_tokens.unwrap_or(0),
            reply.len()
        );

        Ok(reply)
    }
}
