//! Remove command: delete a word located by search term.

use serde::{Deserialize, Serialize};

use crate::core::WordRecord;
use crate::storage::RecordStore;
use crate::wordbook::Wordbook;

/// Options for the remove command.
#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the remove command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveOutput {
    /// Always true: removing nothing is a no-op, not an error.
    pub success: bool,
    /// The removed word, if one matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<String>,
    /// Words remaining in the collection.
    pub remaining: usize,
}

impl RemoveOutput {
    pub fn removed(word: impl Into<String>, remaining: usize) -> Self {
        Self {
            success: true,
            removed: Some(word.into()),
            remaining,
        }
    }

    pub fn not_found(remaining: usize) -> Self {
        Self {
            success: true,
            removed: None,
            remaining,
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        match &self.removed {
            Some(word) => format!("Removed '{}'. {} words remain.", word, self.remaining),
            None => "No words found matching your search.".to_string(),
        }
    }
}

/// The remove command implementation.
pub struct RemoveCommand;

impl RemoveCommand {
    /// Remove the first word whose text or translation contains `term`.
    ///
    /// Matching is case-insensitive. No match is a no-op.
    pub fn run<W: RecordStore<WordRecord>>(wordbook: &mut Wordbook<W>, term: &str) -> RemoveOutput {
        let target = wordbook
            .find(term)
            .first()
            .map(|w| (w.id.clone(), w.word.clone()));

        match target {
            Some((id, word)) => {
                wordbook.remove(&id);
                RemoveOutput::removed(word, wordbook.len())
            }
            None => RemoveOutput::not_found(wordbook.len()),
        }
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &RemoveOutput, options: &RemoveOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}
