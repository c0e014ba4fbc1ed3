//! Today command: the dashboard queue and daily progress.

use serde::{Deserialize, Serialize};

use crate::app::AppContext;
use crate::core::{ReviewEvent, WordRecord};
use crate::storage::RecordStore;

/// Options for the today command.
#[derive(Debug, Clone, Default)]
pub struct TodayOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the today command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayOutput {
    /// Whether the command was successful.
    pub success: bool,
    /// Words added this process.
    pub daily_progress: u32,
    /// The configured daily goal.
    pub daily_goal: u32,
    /// Words still to add today.
    pub words_left: u32,
    /// Today's study queue: the first words of the collection.
    pub queue: Vec<String>,
}

impl TodayOutput {
    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        let mut lines = vec![format!(
            "Daily progress: {}/{}",
            self.daily_progress, self.daily_goal
        )];

        if self.queue.is_empty() {
            lines.push("Add some words to get started.".to_string());
        } else {
            lines.push(format!("Today: {}", self.queue.join(", ")));
        }

        lines.push(format!("Words left today: {}", self.words_left));
        lines.join("\n")
    }
}

/// The today command implementation.
pub struct TodayCommand;

impl TodayCommand {
    /// Run the today command.
    pub fn run<W, L>(ctx: &AppContext<W, L>) -> TodayOutput
    where
        W: RecordStore<WordRecord>,
        L: RecordStore<ReviewEvent>,
    {
        let queue = ctx
            .wordbook
            .today_words(ctx.config.daily_goal)
            .iter()
            .map(|w| w.word.clone())
            .collect();

        TodayOutput {
            success: true,
            daily_progress: ctx.daily_progress,
            daily_goal: ctx.config.daily_goal,
            words_left: ctx.words_left_today(),
            queue,
        }
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &TodayOutput, options: &TodayOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}
