//! Lexi - vocabulary trainer with quiz practice and review statistics
//!
//! CLI entry point.

use std::io::{BufReader, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use lexi::config::Config;
use lexi::FileAppContext;

// =============================================================================
// CLI Definition
// =============================================================================

/// Lexi - vocabulary trainer with quiz practice and review statistics
#[derive(Parser)]
#[command(name = "lexi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a word to the collection
    Add {
        /// The word to learn
        word: String,
        /// Its translation
        translation: String,
        /// Example sentence
        #[arg(long, short, default_value = "")]
        sentence: String,
        /// Topic grouping
        #[arg(long, short, default_value = "")]
        topic: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Delete the first word matching a search term
    Remove {
        /// Substring matched against word or translation
        term: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// List words, optionally filtered
    List {
        /// Exact topic filter
        #[arg(long, short)]
        topic: Option<String>,
        /// Tag filter (case-insensitive)
        #[arg(long)]
        tag: Option<String>,
        /// Status filter: New, Learning, or Mastered
        #[arg(long, short)]
        status: Option<String>,
        /// Substring filter over word or translation
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Search words, translations, and example sentences
    Search {
        /// Search term
        term: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show, rename, or clear topics
    Topics {
        #[command(subcommand)]
        action: Option<TopicsSubcommand>,
        /// Output as JSON
        #[arg(long, short, global = true)]
        json: bool,
        /// Suppress output
        #[arg(long, short, global = true)]
        quiet: bool,
    },

    /// Run interactive quiz practice
    Practice {
        /// Topic to practice ("All" for everything)
        #[arg(long, short)]
        topic: Option<String>,
        /// Output the session summary as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress the session summary
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show review statistics
    Stats {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show today's study queue and daily progress
    Today {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Translate a phrase
    Translate {
        /// Text to translate
        text: String,
        /// Source language name or code
        #[arg(long, default_value = "French")]
        from: String,
        /// Target language name or code
        #[arg(long, default_value = "Russian")]
        to: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Ask the language assistant
    Chat {
        /// The message to send
        message: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },
}

#[derive(Subcommand)]
enum TopicsSubcommand {
    /// Rename a topic on every word under it
    Rename {
        /// Current topic name
        old: String,
        /// New topic name
        new: String,
    },
    /// Move every word under a topic back to the default topic
    Clear {
        /// Topic to clear
        topic: String,
    },
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("lexi error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Convert a success boolean to an exit code.
fn success_to_exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Print a rendered output unless it is empty.
fn emit(formatted: String) {
    if !formatted.is_empty() {
        println!("{}", formatted);
    }
}

/// Run the CLI and return the exit code.
fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            word,
            translation,
            sentence,
            topic,
            tags,
            json,
            quiet,
        } => run_add(&word, &translation, &sentence, &topic, &tags, json, quiet),
        Commands::Remove { term, json, quiet } => run_remove(&term, json, quiet),
        Commands::List {
            topic,
            tag,
            status,
            search,
            json,
            quiet,
        } => run_list(topic, tag, status, search, json, quiet),
        Commands::Search { term, json, quiet } => run_search(&term, json, quiet),
        Commands::Topics {
            action,
            json,
            quiet,
        } => run_topics(action, json, quiet),
        Commands::Practice { topic, json, quiet } => run_practice(topic, json, quiet),
        Commands::Stats { json, quiet } => run_stats(json, quiet),
        Commands::Today { json, quiet } => run_today(json, quiet),
        Commands::Translate {
            text,
            from,
            to,
            json,
            quiet,
        } => run_translate(&text, from, to, json, quiet),
        Commands::Chat {
            message,
            json,
            quiet,
        } => run_chat(&message, json, quiet),
    }
}

// =============================================================================
// Command Implementations
// =============================================================================

fn open_context() -> Result<FileAppContext, Box<dyn std::error::Error>> {
    Ok(FileAppContext::open(Config::load())?)
}

#[allow(clippy::too_many_arguments)]
fn run_add(
    word: &str,
    translation: &str,
    sentence: &str,
    topic: &str,
    tags: &str,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::add::{AddCommand, AddOptions};

    let mut ctx = open_context()?;
    let options = AddOptions { json, quiet };

    let output = AddCommand::run(&mut ctx, word, translation, sentence, topic, tags);
    emit(AddCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_remove(term: &str, json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::remove::{RemoveCommand, RemoveOptions};

    let mut ctx = open_context()?;
    let options = RemoveOptions { json, quiet };

    let output = RemoveCommand::run(&mut ctx.wordbook, term);
    emit(RemoveCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_list(
    topic: Option<String>,
    tag: Option<String>,
    status: Option<String>,
    search: Option<String>,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::list::{ListCommand, ListOptions};

    let ctx = open_context()?;
    let options = ListOptions {
        json,
        quiet,
        topic,
        tag,
        status,
        search,
    };

    let output = ListCommand::run(&ctx.wordbook, &options);
    emit(ListCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_search(term: &str, json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::search::{SearchCommand, SearchOptions};

    let ctx = open_context()?;
    let options = SearchOptions { json, quiet };

    let output = SearchCommand::run(&ctx.wordbook, term);
    emit(SearchCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_topics(
    action: Option<TopicsSubcommand>,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::topics::{TopicsAction, TopicsCommand, TopicsOptions};

    let mut ctx = open_context()?;
    let options = TopicsOptions { json, quiet };

    let action = match action {
        None => TopicsAction::List,
        Some(TopicsSubcommand::Rename { old, new }) => TopicsAction::Rename { old, new },
        Some(TopicsSubcommand::Clear { topic }) => TopicsAction::Clear { topic },
    };

    let output = TopicsCommand::run(&mut ctx.wordbook, &action);
    emit(TopicsCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_practice(
    topic: Option<String>,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::practice::{PracticeCommand, PracticeOptions};

    let mut ctx = open_context()?;
    let options = PracticeOptions { json, quiet, topic };

    let stdin = std::io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut screen = std::io::stdout();
    let mut rng = rand::rng();

    let output = PracticeCommand::run(&mut ctx, &options, &mut input, &mut screen, &mut rng);
    let _ = screen.flush();
    emit(PracticeCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_stats(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::stats_cmd::{StatsCommand, StatsOptions};

    let ctx = open_context()?;
    let options = StatsOptions { json, quiet };

    let output = StatsCommand::run(&ctx);
    emit(StatsCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_today(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::today::{TodayCommand, TodayOptions};

    let ctx = open_context()?;
    let options = TodayOptions { json, quiet };

    let output = TodayCommand::run(&ctx);
    emit(TodayCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_translate(
    text: &str,
    from: String,
    to: String,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::translate_cmd::{TranslateCommand, TranslateOptions};

    let config = Config::load();
    let options = TranslateOptions {
        json,
        quiet,
        from,
        to,
    };

    let cmd = TranslateCommand::new(config.translate);
    let output = cmd.run(text, &options);
    emit(TranslateCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

fn run_chat(message: &str, json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use lexi::cli::chat_cmd::{ChatCommand, ChatOptions};
    use lexi::remote::ChatClient;

    let config = Config::load();
    let options = ChatOptions { json, quiet };

    let cmd = ChatCommand::new(ChatClient::from_env(config.chat));
    let output = cmd.run(message);
    emit(ChatCommand::format_output(&output, &options));

    Ok(success_to_exit_code(output.success))
}

// =============================================================================
// CLI Parse Tests
// =============================================================================
