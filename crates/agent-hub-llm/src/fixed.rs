//! Fixed-reply agent used when no model provider is wired up.

use async_trait::async_trait;

use agent_hub_core::UpstreamError;

use crate::Agent;

/// The reply returned for every prompt.
const STATIC_REPLY: &str = "hello world";

/// Agent that ignores the prompt and always replies with the same string.
#[derive(Debug, Default)]
pub struct StaticAgent;

impl StaticAgent {
    /// Creates a new static agent.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Agent for StaticAgent {
    async fn respond(&self, _prompt: &str) -> Result<String, UpstreamError> {
        Ok(STATIC_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_with_fixed_string() {
        let agent = StaticAgent::new();
        let reply = agent.respond("test prompt").await.unwrap();
        assert_eq!(reply, "hello world");
    }

    #[tokio::test]
    async fn ignores_prompt_content() {
        let agent = StaticAgent::new();
        let reply = agent.respond("Special characters: @#$%^&*()").await.unwrap();
        assert_eq!(reply, "hello world");
    }
}
