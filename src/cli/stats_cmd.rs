//! Stats command: the dashboard statistics panel.

use serde::{Deserialize, Serialize};

use crate::app::AppContext;
use crate::core::{ReviewEvent, WordRecord};
use crate::stats::{DayCount, TypeAccuracy};
use crate::storage::RecordStore;

/// Options for the stats command.
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the stats command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    /// Whether the command was successful.
    pub success: bool,
    /// Words in the collection.
    pub total_words: usize,
    /// Events in the review ledger.
    pub total_reviews: usize,
    /// Consecutive days meeting the daily goal.
    pub streak: u32,
    /// Day with the most correct reviews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_day: Option<DayCount>,
    /// Accuracy per test type.
    pub accuracy_by_type: Vec<TypeAccuracy>,
    /// Best session score this process.
    pub best_score: u32,
    /// Smoothed session score this process.
    pub average_score: u32,
}

impl StatsOutput {
    /// Format as human-readable text.
    pub fn format_text(&self) -> String {
        let mut lines = vec![
            "Your statistics:".to_string(),
            String::new(),
            format!("Total words:    {}", self.total_words),
            format!("Total reviews:  {}", self.total_reviews),
            format!("Streak:         {}", self.streak),
            format!("Best score:     {}%", self.best_score),
            format!("Average score:  {}%", self.average_score),
        ];

        match &self.best_day {
            Some(best) => lines.push(format!("Best day:       {} ({})", best.date, best.count)),
            None => lines.push("Best day:       —".to_string()),
        }

        if self.accuracy_by_type.is_empty() {
            lines.push("Accuracy:       no practice data yet".to_string());
        } else {
            let parts: Vec<String> = self
                .accuracy_by_type
                .iter()
                .map(|a| format!("{}: {}%", a.test_type, a.percent))
                .collect();
            lines.push(format!("Accuracy:       {}", parts.join("; ")));
        }

        lines.join("\n")
    }
}

/// The stats command implementation.
pub struct StatsCommand;

impl StatsCommand {
    /// Run the stats command.
    pub fn run<W, L>(ctx: &AppContext<W, L>) -> StatsOutput
    where
        W: RecordStore<WordRecord>,
        L: RecordStore<ReviewEvent>,
    {
        let summary = ctx.summary();
        StatsOutput {
            success: true,
            total_words: ctx.wordbook.len(),
            total_reviews: summary.total_reviews,
            streak: summary.streak,
            best_day: summary.best_day,
            accuracy_by_type: summary.accuracy_by_type,
            best_score: ctx.practice_stats.best_score,
            average_score: ctx.practice_stats.average_score,
        }
    }

    /// Render the output honoring the shared flags.
    pub fn format_output(output: &StatsOutput, options: &StatsOptions) -> String {
        crate::cli::render(output, output.format_text(), options.json, options.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ledger::ReviewLedger;
    use crate::storage::MemoryRecordStore;
    use crate::wordbook::Wordbook;

    fn context() -> AppContext<MemoryRecordStore<WordRecord>, MemoryRecordStore<ReviewEvent>> {
        AppContext::new(
            Config::default(),
            Wordbook::load(MemoryRecordStore::new()),
            ReviewLedger::load(MemoryRecordStore::new()),
        )
    }

    #[test]
    fn test_stats_empty_context() {
        let ctx = context();
        let output = StatsCommand::run(&ctx);

        assert!(output.success);
        assert_eq!(output.total_words, 0);
        assert_eq!(output.total_reviews, 0);
        assert_eq!(output.streak, 0);
        assert!(output.best_day.is_none());
        assert!(output.accuracy_by_type.is_empty());
    }

    #[test]
    fn test_stats_reflect_activity() {
        let mut ctx = context();
        ctx.add_word("chat", "cat", "", "", "").unwrap();
        ctx.ledger.append("Chat", true, "practice");
        ctx.ledger.append("Chat", false, "practice");
        ctx.record_session_score(50);

        let output = StatsCommand::run(&ctx);

        assert_eq!(output.total_words, 1);
        assert_eq!(output.total_reviews, 2);
        assert_eq!(output.accuracy_by_type[0].percent, 50);
        assert_eq!(output.best_score, 50);
        assert_eq!(output.average_score, 50);
        assert!(output.best_day.is_some());
    }

    #[test]
    fn test_format_text_no_data() {
        let ctx = context();
        let output = StatsCommand::run(&ctx);
        let text = output.format_text();

        assert!(text.contains("Best day:       —"));
        assert!(text.contains("no practice data yet"));
    }

    #[test]
    fn test_format_text_with_accuracy() {
        let mut ctx = context();
        ctx.ledger.append("Chat", true, "practice");

        let output = StatsCommand::run(&ctx);
        assert!(output.format_text().contains("practice: 100%"));
    }
}
