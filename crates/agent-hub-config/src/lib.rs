//! Environment-based configuration loading.
//!
//! All settings are read from environment variables under the `AGENT_HUB_`
//! prefix. The Anthropic API key is mandatory and the loader fails fast
//! without it; the bind address and agent mode fall back to defaults.
//! Configuration is loaded exactly once at startup and never re-read.

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

/// Prefix applied to every environment variable the service reads.
pub const ENV_PREFIX: &str = "AGENT_HUB_";

/// Default bind address when `AGENT_HUB_HTTP_ADDR` is not set.
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8000";

/// Configuration loading errors. Fatal at startup; never raised afterwards.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing mandatory environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

/// Anthropic provider settings.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key sent as `x-api-key` on every provider call.
    pub api_key: String,
}

/// Which agent adapter variant the server runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentMode {
    /// Delegate prompts to the Anthropic Messages API.
    #[default]
    Anthropic,
    /// Always reply with a fixed string; no upstream calls.
    Static,
}

impl FromStr for AgentMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anthropic" => Ok(Self::Anthropic),
            "static" => Ok(Self::Static),
            _ => Err(()),
        }
    }
}

/// Centralized application configuration, constructed once at startup and
/// immutable thereafter.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Anthropic-specific configuration.
    pub anthropic: AnthropicConfig,
    /// Address the HTTP server binds to.
    pub http_addr: SocketAddr,
    /// Selected agent adapter variant.
    pub agent_mode: AgentMode,
}

fn env_or_err(key: &str) -> Result<String, ConfigError> {
    let full_key = format!("{ENV_PREFIX}{key}");
    match std::env::var(&full_key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(full_key)),
    }
}

fn env_optional(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}"))
        .ok()
        .filter(|value| !value.is_empty())
}

/// Loads all application configuration from environment variables.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let api_key = env_or_err("ANTHROPIC_API_KEY")?;

    let http_addr = match env_optional("HTTP_ADDR") {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: format!("{ENV_PREFIX}HTTP_ADDR"),
            value: raw,
        })?,
        None => DEFAULT_HTTP_ADDR
            .parse()
            .expect("default bind address is a valid socket address"),
    };

    let agent_mode = match env_optional("AGENT_MODE") {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: format!("{ENV_PREFIX}AGENT_MODE"),
            value: raw,
        })?,
        None => AgentMode::default(),
    };

    Ok(AppConfig {
        anthropic: AnthropicConfig { api_key },
        http_addr,
        agent_mode,
    })
}
