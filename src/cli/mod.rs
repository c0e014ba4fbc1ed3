//! CLI commands for lexi.
//!
//! Each command follows the same pattern: an options struct, a
//! serializable output with `success`/`failure` constructors and a
//! `format_text()` renderer, and a command struct run against the
//! application context. Commands are unit-tested against the in-memory
//! stores.

pub mod add;
pub mod chat_cmd;
pub mod list;
pub mod practice;
pub mod remove;
pub mod search;
pub mod stats_cmd;
pub mod today;
pub mod topics;
pub mod translate_cmd;

pub use add::AddCommand;
pub use chat_cmd::ChatCommand;
pub use list::ListCommand;
pub use practice::PracticeCommand;
pub use remove::RemoveCommand;
pub use search::SearchCommand;
pub use stats_cmd::StatsCommand;
pub use today::TodayCommand;
pub use topics::TopicsCommand;
pub use translate_cmd::TranslateCommand;

/// Render a command output honoring the shared `--json`/`--quiet` flags.
pub fn render<T: serde::Serialize>(output: &T, text: String, json: bool, quiet: bool) -> String {
    if quiet {
        return String::new();
    }
    if json {
        return serde_json::to_string_pretty(output).unwrap_or_default();
    }
    text
}
