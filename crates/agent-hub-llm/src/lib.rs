//! Agent adapters that turn a single prompt into a single reply.
//!
//! This crate provides the narrow capability the HTTP service depends on:
//!
//! - [`Agent`] — async trait: prompt in, final reply text out
//! - [`AnthropicAgent`] — delegates to the Anthropic Messages API, no tools attached
//! - [`StaticAgent`] — fixed reply, no upstream calls
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_hub_llm::{Agent, StaticAgent};
//!
//! let agent = StaticAgent::new();
//! let reply = agent.respond("Hello!").await?;
//! assert_eq!(reply, "hello world");
//! ```

mod anthropic;
mod fixed;

use async_trait::async_trait;

pub use agent_hub_core::UpstreamError;
pub use anthropic::AnthropicAgent;
pub use fixed::StaticAgent;

/// An agent takes a conversation and produces a reply.
///
/// Implementations are read-only after construction and safe to share across
/// concurrent requests.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Produces the final reply for a single prompt.
    async fn respond(&self, prompt: &str) -> Result<String, UpstreamError>;
}
