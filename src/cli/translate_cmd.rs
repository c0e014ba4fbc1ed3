//! Translate command: look a phrase up through the translation endpoint.

use serde::{Deserialize, Serialize};

use crate::config::TranslateConfig;
use crate::remote::{BackgroundCall, Translator};

/// Options for the translate command.
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Source language name or code.
    pub from: String,
    /// Target language name or code.
    pub to: String,
}

/// Output format for the translate command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateOutput {
    /// Whether a translation came back.
    pub success: bool,
    /// The translated text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    /// Inline error message when the call failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslateOutput {
    /// Create a successful output.
    pub fn success(translation: impl Into<String>) -> Self {
        Self {
            success: true,
            translation: Some(translation.into()),
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            translation: None,
            error: Some(error.into()),
        }
    }

    /// An empty-input no-op: nothing to do, nothing to print.
    pub fn noop() -> Self {
        Self {
            success: true,
            translation: None,
            error: None,
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {}", error);
        }
        self.translation.clone().unwrap_or_default()
    }
}

/// The translate command implementation.
pub struct TranslateCommand {
    translator: Translator,
}

impl TranslateCommand {
    /// Create a new translate command.
    pub fn new(config: TranslateConfig) -> Self {
        Self {
            translator: Translator::new(config),
        }
    }

    /// Run the translation on a worker thread and wait for the reply.
    ///
    /// Empty input is a silent no-op. Failures come back as an inline
    /// error string, never a crash.
    pub fn run(&self, text: &str, options: &TranslateOptions) -> TranslateOutput {
        let text = text.trim().to_string();
        if text.is_empty() {
            return TranslateOutput::noop();
        }

        let translator = self.translator.clone();
        let from = options.from.clone();
        let to = options.to.clone();

        let call =
            BackgroundCall::spawn("translate", move || translator.translate(&text, &from, &to));

        match call.wait() {
            Ok(translation) => TranslateOutput::success(translation),
            Err(e) => TranslateOutput::failure(e.to_string()),
        }
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &TranslateOutput, options: &TranslateOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}
