//! Chat command: one exchange with the language assistant.

use serde::{Deserialize, Serialize};

use crate::remote::{BackgroundCall, ChatClient};

/// Options for the chat command.
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the chat command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOutput {
    /// Whether a reply came back.
    pub success: bool,
    /// The assistant's reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    /// Inline error message when the call failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatOutput {
    /// Create a successful output.
    pub fn success(reply: impl Into<String>) -> Self {
        Self {
            success: true,
            reply: Some(reply.into()),
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            reply: None,
            error: Some(error.into()),
        }
    }

    /// An empty-input no-op: nothing to do, nothing to print.
    pub fn noop() -> Self {
        Self {
            success: true,
            reply: None,
            error: None,
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {}", error);
        }
        match &self.reply {
            Some(reply) => format!("AI: {}", reply),
            None => String::new(),
        }
    }
}

/// The chat command implementation.
pub struct ChatCommand {
    client: ChatClient,
}

impl ChatCommand {
    /// Create a new chat command.
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Send one message on a worker thread and wait for the reply.
    ///
    /// Empty input is a silent no-op. A missing API key, like any other
    /// failure, becomes an inline error string.
    pub fn run(&self, message: &str) -> ChatOutput {
        let message = message.trim().to_string();
        if message.is_empty() {
            return ChatOutput::noop();
        }

        let client = self.client.clone();
        let call = BackgroundCall::spawn("chat", move || client.send(&message));

        match call.wait() {
            Ok(reply) => ChatOutput::success(reply),
            Err(e) => ChatOutput::failure(e.to_string()),
        }
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &ChatOutput, options: &ChatOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}
