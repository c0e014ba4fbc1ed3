//! Add command: record a new word in the collection.

use serde::{Deserialize, Serialize};

use crate::app::AppContext;
use crate::core::{ReviewEvent, WordRecord};
use crate::storage::RecordStore;

/// Options for the add command.
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the add command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOutput {
    /// Whether the word was recorded.
    pub success: bool,
    /// The recorded word, display-capitalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    /// Words added this process, after this one.
    pub daily_progress: u32,
    /// The configured daily goal.
    pub daily_goal: u32,
    /// Error message if the word was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AddOutput {
    /// Create a successful output.
    pub fn success(word: impl Into<String>, daily_progress: u32, daily_goal: u32) -> Self {
        Self {
            success: true,
            word: Some(word.into()),
            daily_progress,
            daily_goal,
            error: None,
        }
    }

    /// Create a failed output.
    pub fn failure(error: impl Into<String>, daily_progress: u32, daily_goal: u32) -> Self {
        Self {
            success: false,
            word: None,
            daily_progress,
            daily_goal,
            error: Some(error.into()),
        }
    }

    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        if !self.success {
            return format!(
                "Add failed: {}",
                self.error.as_deref().unwrap_or("unknown error")
            );
        }

        format!(
            "Added '{}'. Daily progress: {}/{}",
            self.word.as_deref().unwrap_or("?"),
            self.daily_progress,
            self.daily_goal
        )
    }
}

/// The add command implementation.
pub struct AddCommand;

impl AddCommand {
    /// Run the add command.
    pub fn run<W, L>(
        ctx: &mut AppContext<W, L>,
        word: &str,
        translation: &str,
        sentence: &str,
        topic: &str,
        tags: &str,
    ) -> AddOutput
    where
        W: RecordStore<WordRecord>,
        L: RecordStore<ReviewEvent>,
    {
        let daily_goal = ctx.config.daily_goal;
        match ctx.add_word(word, translation, sentence, topic, tags) {
            Some(record) => {
                let recorded = record.word.clone();
                AddOutput::success(recorded, ctx.daily_progress, daily_goal)
            }
            None => AddOutput::failure(
                "word and translation must not be empty",
                ctx.daily_progress,
                daily_goal,
            ),
        }
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &AddOutput, options: &AddOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}
