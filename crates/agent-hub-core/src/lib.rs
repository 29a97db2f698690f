//! Core domain types and error definitions for Agent Hub.
//!
//! This crate provides the fundamental types shared across the service:
//!
//! - [`UpstreamError`] — Error type for failures of the external model provider
//! - [`Message`] and [`MessageRole`] — Conversation transcript types
//!
//! # Example
//!
//! ```rust
//! use agent_hub_core::{Message, MessageRole};
//!
//! let msg = Message::user("Hello!");
//! assert_eq!(msg.role, MessageRole::User);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by an agent's upstream model provider.
///
/// These are not retried or translated anywhere in the request path; the
/// HTTP layer maps all of them to a generic server error.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The provider returned a non-success HTTP status.
    #[error("Anthropic API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never completed (connect failure, timeout).
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The provider's response body could not be decoded.
    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    /// The reply transcript contained no assistant text.
    #[error("upstream reply contained no text content")]
    EmptyReply,
}

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the assistant/LLM.
    Assistant,
}

/// A single turn in a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
}

impl Message {
    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Creates a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}
