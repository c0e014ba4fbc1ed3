//! Search command: find words by substring.
//!
//! Unlike the list filter, search also looks inside example sentences.

use serde::{Deserialize, Serialize};

use crate::core::WordRecord;
use crate::storage::RecordStore;
use crate::wordbook::Wordbook;

/// Options for the search command.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// One search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub word: String,
    pub translation: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub sentence: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub date_added: String,
}

impl From<&WordRecord> for SearchHit {
    fn from(record: &WordRecord) -> Self {
        Self {
            word: record.word.clone(),
            translation: record.translation.clone(),
            sentence: record.sentence.clone(),
            date_added: record.date_added.clone(),
        }
    }
}

/// Output format for the search command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutput {
    /// Whether the command was successful.
    pub success: bool,
    /// The term searched for.
    pub term: String,
    /// Matching words, in collection order.
    pub hits: Vec<SearchHit>,
    /// Error message if command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchOutput {
    /// Create a successful output.
    pub fn success(term: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        Self {
            success: true,
            term: term.into(),
            hits,
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(term: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            term: term.into(),
            hits: vec![],
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if !self.success {
            return format!(
                "Search failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        }

        if self.hits.is_empty() {
            return format!("No results found for '{}'.", self.term);
        }

        let mut lines = Vec::new();
        for hit in &self.hits {
            lines.push(format!("{} - {}", hit.word, hit.translation));
            if !hit.sentence.is_empty() {
                lines.push(format!("  Example: {}", hit.sentence));
            }
            if !hit.date_added.is_empty() {
                lines.push(format!("  Added: {}", hit.date_added));
            }
        }
        lines.join("\n")
    }
}

/// The search command implementation.
pub struct SearchCommand;

impl SearchCommand {
    /// Run the search command.
    ///
    /// Matches case-insensitively over word, translation, or example
    /// sentence. An empty term fails with a prompt to enter one.
    pub fn run<W: RecordStore<WordRecord>>(wordbook: &Wordbook<W>, term: &str) -> SearchOutput {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return SearchOutput::failure(term, "please enter a search term");
        }

        let needle = trimmed.to_lowercase();
        let hits = wordbook
            .words()
            .iter()
            .filter(|w| {
                w.matches_search(trimmed) || w.sentence.to_lowercase().contains(&needle)
            })
            .map(SearchHit::from)
            .collect();

        SearchOutput::success(trimmed, hits)
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &SearchOutput, options: &SearchOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}
