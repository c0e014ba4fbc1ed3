//! Lexi - vocabulary trainer with quiz practice and review statistics
//!
//! Lexi keeps a JSON-backed word collection and an append-only review
//! history, runs quiz sessions over sampled word subsets, and derives
//! dashboard statistics (streak, best day, per-type accuracy) from the
//! history. Two thin remote clients cover translation lookup and the
//! chat-based language assistant.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod ledger;
pub mod remote;
pub mod stats;
pub mod storage;
pub mod util;
pub mod wordbook;

pub use app::{AppContext, FileAppContext};
pub use config::Config;
pub use crate::core::{
    AnswerFeedback, Direction, Question, QuizSession, ReviewEvent, ReviewOutcome, WordRecord,
    WordStatus, DEFAULT_TOPIC, MASTERY_THRESHOLD, MAX_QUIZ_WORDS, TEST_TYPE_PRACTICE,
};
pub use error::{FailSoft, LexiError, Result};
pub use ledger::ReviewLedger;
pub use remote::{BackgroundCall, ChatClient, RequestTracker, Translator, API_KEY_ENV};
pub use stats::{DayCount, PracticeStats, ReviewSummary, TypeAccuracy};
pub use storage::{FileRecordStore, MemoryRecordStore, RecordStore};
pub use wordbook::{WordFilter, Wordbook, ALL_TOPICS};

// CLI commands
pub use cli::{
    AddCommand, ChatCommand, ListCommand, PracticeCommand, RemoveCommand, SearchCommand,
    StatsCommand, TodayCommand, TopicsCommand, TranslateCommand,
};
