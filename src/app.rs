//! Application context: the one owner of all mutable state.
//!
//! Every operation works against an explicit `AppContext` instead of
//! global state. Its lifecycle is the process lifecycle; the in-memory
//! pieces (daily progress, practice stats, last selected topic) reset on
//! restart by design.

use crate::config::{self, Config};
use crate::core::{ReviewEvent, WordRecord};
use crate::error::{LexiError, Result};
use crate::ledger::ReviewLedger;
use crate::stats::{PracticeStats, ReviewSummary};
use crate::storage::{FileRecordStore, RecordStore};
use crate::wordbook::{Wordbook, ALL_TOPICS};

/// Owns the word collection, the review ledger, and the per-process
/// counters around them.
#[derive(Debug)]
pub struct AppContext<W, L>
where
    W: RecordStore<WordRecord>,
    L: RecordStore<ReviewEvent>,
{
    pub config: Config,
    pub wordbook: Wordbook<W>,
    pub ledger: ReviewLedger<L>,
    /// Session-score stats, process lifetime only.
    pub practice_stats: PracticeStats,
    /// Words added this process. Never persisted.
    pub daily_progress: u32,
    /// Last topic chosen for practice, offered as the next default.
    pub last_selected_topic: String,
}

/// The file-backed context used by the CLI.
pub type FileAppContext = AppContext<FileRecordStore<WordRecord>, FileRecordStore<ReviewEvent>>;

impl FileAppContext {
    /// Open the context against the configured data directory.
    pub fn open(config: Config) -> Result<Self> {
        let words_path = config::words_path()
            .ok_or_else(|| LexiError::config("could not determine the lexi home directory"))?;
        let history_path = config::history_path()
            .ok_or_else(|| LexiError::config("could not determine the lexi home directory"))?;

        let wordbook = Wordbook::load(FileRecordStore::new(words_path)?);
        let ledger = ReviewLedger::load(FileRecordStore::new(history_path)?);

        Ok(Self::new(config, wordbook, ledger))
    }
}

impl<W, L> AppContext<W, L>
where
    W: RecordStore<WordRecord>,
    L: RecordStore<ReviewEvent>,
{
    /// Wire a context from already-loaded parts.
    pub fn new(config: Config, wordbook: Wordbook<W>, ledger: ReviewLedger<L>) -> Self {
        Self {
            config,
            wordbook,
            ledger,
            practice_stats: PracticeStats::new(),
            daily_progress: 0,
            last_selected_topic: ALL_TOPICS.to_string(),
        }
    }

    /// Add a word, counting it toward today's progress on success.
    pub fn add_word(
        &mut self,
        word: &str,
        translation: &str,
        sentence: &str,
        topic: &str,
        tags_text: &str,
    ) -> Option<&WordRecord> {
        let added = self
            .wordbook
            .add(word, translation, sentence, topic, tags_text);
        if added.is_some() {
            self.daily_progress += 1;
        }
        added
    }

    /// Words still to add before today's goal is met.
    pub fn words_left_today(&self) -> u32 {
        self.config.daily_goal.saturating_sub(self.daily_progress)
    }

    /// Recompute the dashboard statistics from the ledger.
    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary::compute_today(self.ledger.events(), self.config.daily_goal)
    }

    /// Fold a finished practice session's score into the process stats.
    pub fn record_session_score(&mut self, score: u32) {
        self.practice_stats.record_session(score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryRecordStore;

    type TestContext =
        AppContext<MemoryRecordStore<WordRecord>, MemoryRecordStore<ReviewEvent>>;

    fn context() -> TestContext {
        AppContext::new(
            Config::default(),
            Wordbook::load(MemoryRecordStore::new()),
            ReviewLedger::load(MemoryRecordStore::new()),
        )
    }

    #[test]
    fn test_add_word_advances_daily_progress() {
        let mut ctx = context();
        assert_eq!(ctx.daily_progress, 0);

        ctx.add_word("chat", "cat", "", "", "").unwrap();
        assert_eq!(ctx.daily_progress, 1);
        assert_eq!(ctx.words_left_today(), ctx.config.daily_goal - 1);
    }

    #[test]
    fn test_rejected_add_does_not_advance_progress() {
        let mut ctx = context();

        assert!(ctx.add_word("", "cat", "", "", "").is_none());
        assert_eq!(ctx.daily_progress, 0);
    }

    #[test]
    fn test_words_left_saturates_at_zero() {
        let mut ctx = context();
        ctx.config.daily_goal = 1;

        ctx.add_word("un", "one", "", "", "").unwrap();
        ctx.add_word("deux", "two", "", "", "").unwrap();

        assert_eq!(ctx.words_left_today(), 0);
    }

    #[test]
    fn test_summary_reflects_ledger() {
        let mut ctx = context();
        ctx.ledger.append("Chat", true, "practice");
        ctx.ledger.append("Chien", false, "practice");

        let summary = ctx.summary();
        assert_eq!(summary.total_reviews, 2);
        assert_eq!(summary.accuracy_by_type[0].percent, 50);
    }

    #[test]
    fn test_record_session_score() {
        let mut ctx = context();
        ctx.record_session_score(80);
        ctx.record_session_score(40);

        assert_eq!(ctx.practice_stats.best_score, 80);
        assert_eq!(ctx.practice_stats.average_score, 60);
    }

    #[test]
    fn test_default_topic_selector() {
        let ctx = context();
        assert_eq!(ctx.last_selected_topic, ALL_TOPICS);
    }
}
