//! List command: browse the collection through the conjunction filter.

use serde::{Deserialize, Serialize};

use crate::core::{WordRecord, WordStatus};
use crate::storage::RecordStore;
use crate::wordbook::{WordFilter, Wordbook};

/// Options for the list command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Exact topic filter.
    pub topic: Option<String>,
    /// Case-insensitive tag filter.
    pub tag: Option<String>,
    /// Status filter, by display name.
    pub status: Option<String>,
    /// Substring filter over word or translation.
    pub search: Option<String>,
}

/// Summary of one word for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSummary {
    pub word: String,
    pub translation: String,
    pub topic: String,
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub sentence: String,
    pub review_count: u32,
}

impl From<&WordRecord> for WordSummary {
    fn from(record: &WordRecord) -> Self {
        Self {
            word: record.word.clone(),
            translation: record.translation.clone(),
            topic: record.topic.clone(),
            status: record.status.as_str().to_string(),
            tags: record.tags.clone(),
            sentence: record.sentence.clone(),
            review_count: record.review_count,
        }
    }
}

/// Output format for the list command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOutput {
    /// Whether the command was successful.
    pub success: bool,
    /// Matching words, in collection order.
    pub words: Vec<WordSummary>,
    /// Count of matching words.
    pub count: usize,
    /// Error message if command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListOutput {
    /// Create a successful output.
    pub fn success(words: Vec<WordSummary>) -> Self {
        let count = words.len();
        Self {
            success: true,
            words,
            count,
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            words: vec![],
            count: 0,
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if !self.success {
            return format!(
                "List failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        }

        if self.words.is_empty() {
            return "Your word list is empty.".to_string();
        }

        let mut lines = vec![format!("Words ({} found):", self.count), String::new()];

        for word in &self.words {
            lines.push(format!("{} - {}", word.word, word.translation));
            let mut meta = format!("  Topic: {} | Status: {}", word.topic, word.status);
            if word.review_count > 0 {
                meta.push_str(&format!(" | Reviews: {}", word.review_count));
            }
            lines.push(meta);
            if !word.tags.is_empty() {
                lines.push(format!("  Tags: {}", word.tags.join(", ")));
            }
            if !word.sentence.is_empty() {
                lines.push(format!("  Example: {}", word.sentence));
            }
        }

        lines.join("\n")
    }
}

/// The list command implementation.
pub struct ListCommand;

impl ListCommand {
    /// Run the list command.
    pub fn run<W: RecordStore<WordRecord>>(
        wordbook: &Wordbook<W>,
        options: &ListOptions,
    ) -> ListOutput {
        let status = match &options.status {
            Some(value) if !value.is_empty() => match WordStatus::parse(value) {
                Some(status) => Some(status),
                None => {
                    return ListOutput::failure(format!(
                        "unknown status '{}'; expected New, Learning, or Mastered",
                        value
                    ));
                }
            },
            _ => None,
        };

        let filter = WordFilter {
            topic: options.topic.clone(),
            tag: options.tag.clone(),
            status,
            search: options.search.clone(),
        };

        let words = wordbook
            .filter(&filter)
            .into_iter()
            .map(WordSummary::from)
            .collect();
        ListOutput::success(words)
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &ListOutput, options: &ListOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}
