//! Practice command: the interactive quiz loop.
//!
//! Drives quiz sessions over stdin/stdout. Sessions repeat until the user
//! declines another round, so the process-lifetime practice stats (best
//! and smoothed score) are observable across rounds.

use std::io::{BufRead, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::app::AppContext;
use crate::core::{QuizSession, ReviewEvent, WordRecord};
use crate::storage::RecordStore;

/// Options for the practice command.
#[derive(Debug, Clone, Default)]
pub struct PracticeOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Topic to practice; defaults to the last selected topic.
    pub topic: Option<String>,
}

/// One finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub topic: String,
    pub score: u32,
    pub correct: u32,
    pub total: u32,
}

/// Output format for the practice command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeOutput {
    /// Whether the command was successful.
    pub success: bool,
    /// Finished sessions, in order.
    pub sessions: Vec<SessionReport>,
    /// Best session score this process.
    pub best_score: u32,
    /// Smoothed session score this process.
    pub average_score: u32,
}

impl PracticeOutput {
    fn new(sessions: Vec<SessionReport>, best_score: u32, average_score: u32) -> Self {
        Self {
            success: true,
            sessions,
            best_score,
            average_score,
        }
    }
}

/// The practice command implementation.
pub struct PracticeCommand;

impl PracticeCommand {
    /// Run the interactive practice loop.
    ///
    /// `input` and `screen` abstract stdin/stdout so the loop is testable.
    /// EOF at any prompt abandons the current session without scoring it.
    pub fn run<W, L>(
        ctx: &mut AppContext<W, L>,
        options: &PracticeOptions,
        input: &mut impl BufRead,
        screen: &mut impl Write,
        rng: &mut impl Rng,
    ) -> PracticeOutput
    where
        W: RecordStore<WordRecord>,
        L: RecordStore<ReviewEvent>,
    {
        let mut sessions = Vec::new();
        let topic = options
            .topic
            .clone()
            .unwrap_or_else(|| ctx.last_selected_topic.clone());

        loop {
            let Some(mut session) = QuizSession::start(&ctx.wordbook, &topic, rng) else {
                let _ = writeln!(screen, "No words available for testing. Add some words first!");
                break;
            };
            ctx.last_selected_topic = topic.clone();

            let _ = writeln!(screen, "Practice — topic: {}", topic);

            let mut abandoned = false;
            'questions: loop {
                let Some(question) = session.next_question(rng) else {
                    break;
                };
                let prompt = question.prompt.clone();

                let _ = writeln!(screen);
                let _ = writeln!(
                    screen,
                    "Question {} of {}",
                    session.position(),
                    session.len()
                );
                let _ = writeln!(screen, "{}", prompt);

                // Read until a non-blank answer lands; blank input never
                // advances the session.
                loop {
                    let _ = write!(screen, "> ");
                    let _ = screen.flush();

                    let mut line = String::new();
                    match input.read_line(&mut line) {
                        Ok(0) | Err(_) => {
                            abandoned = true;
                            break 'questions;
                        }
                        Ok(_) => {}
                    }

                    match session.submit_answer(&line, &mut ctx.wordbook, &mut ctx.ledger) {
                        Ok(Some(feedback)) => {
                            if feedback.correct {
                                let _ = writeln!(screen, "Correct!");
                            } else {
                                let _ = writeln!(
                                    screen,
                                    "Incorrect. The answer was '{}'.",
                                    feedback.expected
                                );
                            }
                            break;
                        }
                        Ok(None) => continue,
                        Err(_) => {
                            abandoned = true;
                            break 'questions;
                        }
                    }
                }
            }

            if abandoned {
                break;
            }

            let score = session.score();
            ctx.record_session_score(score);
            sessions.push(SessionReport {
                topic: topic.clone(),
                score,
                correct: session.correct() as u32,
                total: session.len() as u32,
            });

            let _ = writeln!(screen);
            let _ = writeln!(screen, "Practice results");
            let _ = writeln!(screen, "You scored: {}%", score);
            let _ = writeln!(
                screen,
                "{} correct out of {}",
                session.correct(),
                session.len()
            );
            let _ = writeln!(screen, "{}", encouragement(score));

            let _ = write!(screen, "Practice again? [y/N] ");
            let _ = screen.flush();

            let mut line = String::new();
            match input.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if !line.trim().eq_ignore_ascii_case("y") {
                        break;
                    }
                }
            }
        }

        PracticeOutput::new(
            sessions,
            ctx.practice_stats.best_score,
            ctx.practice_stats.average_score,
        )
    }

    /// Render the output honoring the shared flags.
    ///
    /// The interactive transcript already went to the screen, so the text
    /// rendering is empty; only `--json` emits the session summary.
    pub fn format_output(output: &PracticeOutput, options: &PracticeOptions) -> String {
        crate::cli::render(output, String::new(), options.json, options.quiet)
    }
}

fn encouragement(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent!"
    } else if score >= 60 {
        "Good job!"
    } else {
        "Keep practicing!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ledger::ReviewLedger;
    use crate::storage::MemoryRecordStore;
    use crate::wordbook::Wordbook;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    type TestContext = AppContext<MemoryRecordStore<WordRecord>, MemoryRecordStore<ReviewEvent>>;

    fn context() -> TestContext {
        AppContext::new(
            Config::default(),
            Wordbook::load(MemoryRecordStore::new()),
            ReviewLedger::load(MemoryRecordStore::new()),
        )
    }

    /// A word that reads the same in both quiz directions, so tests can
    /// answer correctly without knowing the rolled direction.
    fn context_with_symmetric_word() -> TestContext {
        let mut ctx = context();
        ctx.add_word("taxi", "taxi", "", "", "").unwrap();
        ctx
    }

    fn run(
        ctx: &mut TestContext,
        options: &PracticeOptions,
        stdin: &str,
    ) -> (PracticeOutput, String) {
        let mut input = Cursor::new(stdin.to_string());
        let mut screen = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let output = PracticeCommand::run(ctx, options, &mut input, &mut screen, &mut rng);
        (output, String::from_utf8(screen).unwrap())
    }

    #[test]
    fn test_no_words_available() {
        let mut ctx = context();

        let (output, screen) = run(&mut ctx, &PracticeOptions::default(), "");

        assert!(output.success);
        assert!(output.sessions.is_empty());
        assert!(screen.contains("No words available"));
        assert_eq!(ctx.practice_stats.best_score, 0);
        assert!(ctx.ledger.is_empty());
    }

    #[test]
    fn test_unknown_topic_never_starts_a_session() {
        let mut ctx = context_with_symmetric_word();
        let options = PracticeOptions {
            topic: Some("Nothing".to_string()),
            ..Default::default()
        };

        let (output, _) = run(&mut ctx, &options, "taxi\nn\n");

        assert!(output.sessions.is_empty());
        assert!(ctx.ledger.is_empty());
        // The sticky topic only updates when a session actually starts.
        assert_ne!(ctx.last_selected_topic, "Nothing");
    }

    #[test]
    fn test_perfect_session() {
        let mut ctx = context_with_symmetric_word();

        let (output, screen) = run(&mut ctx, &PracticeOptions::default(), "taxi\nn\n");

        assert_eq!(output.sessions.len(), 1);
        let report = &output.sessions[0];
        assert_eq!(report.score, 100);
        assert_eq!(report.correct, 1);
        assert_eq!(report.total, 1);

        assert!(screen.contains("Correct!"));
        assert!(screen.contains("You scored: 100%"));
        assert!(screen.contains("Excellent!"));

        assert_eq!(ctx.practice_stats.best_score, 100);
        assert_eq!(ctx.ledger.len(), 1);
        assert!(ctx.ledger.events()[0].is_correct());
    }

    #[test]
    fn test_wrong_answer_shows_expected() {
        let mut ctx = context_with_symmetric_word();

        let (output, screen) = run(&mut ctx, &PracticeOptions::default(), "zebra\nn\n");

        assert_eq!(output.sessions[0].score, 0);
        assert!(screen.contains("Incorrect. The answer was"));
        assert!(screen.contains("Keep practicing!"));
        assert_eq!(ctx.ledger.len(), 1);
        assert!(!ctx.ledger.events()[0].is_correct());
        assert_eq!(ctx.wordbook.words()[0].review_count, 0);
    }

    #[test]
    fn test_blank_answer_does_not_advance() {
        let mut ctx = context_with_symmetric_word();

        let (output, _) = run(&mut ctx, &PracticeOptions::default(), "\n\ntaxi\nn\n");

        // The two blank lines were swallowed; one question, one event.
        assert_eq!(output.sessions[0].total, 1);
        assert_eq!(ctx.ledger.len(), 1);
    }

    #[test]
    fn test_practice_again_runs_second_session() {
        let mut ctx = context_with_symmetric_word();

        let (output, _) = run(&mut ctx, &PracticeOptions::default(), "taxi\ny\ntaxi\nn\n");

        assert_eq!(output.sessions.len(), 2);
        assert_eq!(ctx.ledger.len(), 2);
        assert_eq!(output.best_score, 100);
        assert_eq!(output.average_score, 100);
    }

    #[test]
    fn test_eof_abandons_without_scoring() {
        let mut ctx = context_with_symmetric_word();

        // Input ends before any answer.
        let (output, _) = run(&mut ctx, &PracticeOptions::default(), "");

        assert!(output.sessions.is_empty());
        assert_eq!(ctx.practice_stats.best_score, 0);
        assert!(ctx.ledger.is_empty());
    }

    #[test]
    fn test_session_updates_sticky_topic() {
        let mut ctx = context_with_symmetric_word();
        ctx.wordbook.rename_topic(crate::core::DEFAULT_TOPIC, "Transport");
        let options = PracticeOptions {
            topic: Some("Transport".to_string()),
            ..Default::default()
        };

        run(&mut ctx, &options, "taxi\nn\n");

        assert_eq!(ctx.last_selected_topic, "Transport");
    }

    #[test]
    fn test_format_output_json_only() {
        let output = PracticeOutput::new(vec![], 0, 0);

        let text_options = PracticeOptions::default();
        assert!(PracticeCommand::format_output(&output, &text_options).is_empty());

        let json_options = PracticeOptions {
            json: true,
            ..Default::default()
        };
        let rendered = PracticeCommand::format_output(&output, &json_options);
        assert!(rendered.contains("\"sessions\""));
    }
}
