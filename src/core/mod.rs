//! Core domain types: word records, review events, and the quiz engine.

pub mod quiz;
pub mod review;
pub mod word;

pub use quiz::{AnswerFeedback, Direction, Question, QuizSession, MAX_QUIZ_WORDS};
pub use review::{ReviewEvent, ReviewOutcome, TEST_TYPE_PRACTICE};
pub use word::{parse_tags, WordRecord, WordStatus, DEFAULT_TOPIC, MASTERY_THRESHOLD};
