//! Service configuration.
//!
//! `ServiceConfig` controls the completion request shape and the
//! degraded-mode switch. Whether the backend is reachable is decided
//! here, at process configuration time, never inferred from request
//! metadata.

use serde::{Deserialize, Serialize};

/// Configuration for the chat relay service.
///
/// All fields have sensible defaults; loadable from TOML or built from
/// CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Fixed system prompt prepended to every completion request.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Model identifier passed to the completion backend.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens requested per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Run without a completion backend. Turns still persist; replies
    /// are tagged placeholders echoing the user message.
    #[serde(default)]
    pub offline: bool,
}

fn default_system_prompt() -> String {
    "You are a helpful assistant. Keep replies concise.".to_string()
}

fn default_model() -> String {
    "llama-3.1-8b-instruct".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            offline: false,
        }
    }
}
