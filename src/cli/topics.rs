//! Topics command: list, rename, and clear topic groupings.

use serde::{Deserialize, Serialize};

use crate::core::{WordRecord, DEFAULT_TOPIC};
use crate::storage::RecordStore;
use crate::wordbook::Wordbook;

/// Options for the topics command.
#[derive(Debug, Clone, Default)]
pub struct TopicsOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// What the topics command should do.
#[derive(Debug, Clone)]
pub enum TopicsAction {
    /// List topics with their word counts.
    List,
    /// Move every word under `old` to `new`.
    Rename { old: String, new: String },
    /// Move every word under `topic` back to the default topic.
    Clear { topic: String },
}

/// One topic with its word count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: String,
    pub words: usize,
}

/// Output format for the topics command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsOutput {
    /// Whether the command was successful.
    pub success: bool,
    /// Topic listing (list action).
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub topics: Vec<TopicSummary>,
    /// Records rewritten (rename/clear actions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten: Option<usize>,
    /// Human summary of what happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error message if command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TopicsOutput {
    /// Create a listing output.
    pub fn listing(topics: Vec<TopicSummary>) -> Self {
        Self {
            success: true,
            topics,
            rewritten: None,
            message: None,
            error: None,
        }
    }

    /// Create a rewrite output.
    pub fn rewritten(count: usize, message: impl Into<String>) -> Self {
        Self {
            success: true,
            topics: vec![],
            rewritten: Some(count),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            topics: vec![],
            rewritten: None,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if !self.success {
            return format!(
                "Topics failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        }

        if let Some(message) = &self.message {
            return message.clone();
        }

        if self.topics.is_empty() {
            return "No topics yet.".to_string();
        }

        self.topics
            .iter()
            .map(|t| format!("{} ({} words)", t.topic, t.words))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The topics command implementation.
pub struct TopicsCommand;

impl TopicsCommand {
    /// Run the topics command.
    pub fn run<W: RecordStore<WordRecord>>(
        wordbook: &mut Wordbook<W>,
        action: &TopicsAction,
    ) -> TopicsOutput {
        match action {
            TopicsAction::List => {
                let topics = wordbook
                    .topics()
                    .into_iter()
                    .map(|topic| {
                        let words = wordbook
                            .words()
                            .iter()
                            .filter(|w| w.topic == topic)
                            .count();
                        TopicSummary { topic, words }
                    })
                    .collect();
                TopicsOutput::listing(topics)
            }
            TopicsAction::Rename { old, new } => {
                if new.trim().is_empty() {
                    return TopicsOutput::failure("new topic name must not be empty");
                }
                let count = wordbook.rename_topic(old, new);
                TopicsOutput::rewritten(
                    count,
                    format!("Renamed '{}' to '{}' ({} words).", old, new.trim(), count),
                )
            }
            TopicsAction::Clear { topic } => {
                let count = wordbook.clear_topic(topic);
                TopicsOutput::rewritten(
                    count,
                    format!(
                        "Moved {} words from '{}' to '{}'.",
                        count, topic, DEFAULT_TOPIC
                    ),
                )
            }
        }
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &TopicsOutput, options: &TopicsOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}
