//! Chat completion client for the language assistant.
//!
//! A thin wrapper over an OpenRouter-style chat-completions endpoint.
//! The API key comes exclusively from the environment; a missing key is a
//! user-visible error string, never a crash.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;
use crate::error::{LexiError, Result};

/// Environment variable holding the chat API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Reply text used when the endpoint returns no choices.
const EMPTY_REPLY: &str = "No response received.";

/// One message in a chat exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatResponse {
    fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Blocking chat-completions client.
#[derive(Debug, Clone)]
pub struct ChatClient {
    config: ChatConfig,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl ChatClient {
    /// Build a client with the key read from [`API_KEY_ENV`].
    pub fn from_env(config: ChatConfig) -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Self::with_api_key(config, api_key)
    }

    /// Build a client with an explicit key (or none).
    pub fn with_api_key(config: ChatConfig, api_key: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            config,
            api_key,
            client,
        }
    }

    /// Whether a key is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// The request body for one user message.
    fn payload(&self, message: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [ChatMessage::user(message)],
        })
    }

    /// Send one user message and return the assistant's reply text.
    pub fn send(&self, message: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LexiError::remote(format!("{} is not set.", API_KEY_ENV)))?;

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&self.payload(message))
            .send()
            .map_err(|e| LexiError::remote(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LexiError::remote(format!(
                "chat request failed with status {}",
                status
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| LexiError::remote(e.to_string()))?;

        Ok(parsed
            .first_content()
            .unwrap_or(EMPTY_REPLY)
            .to_string())
    }
}
