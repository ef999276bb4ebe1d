//! Command-line interface for wordcard
//! This binary records vocabulary words with their context through the word backend,
//! either one command at a time or from an interactive terminal UI.
//!
//! Usage:
//!   wordcard tokenize `<text>` [--format `<format>`]   - Show how a passage splits into words
//!   wordcard record `<word>` --context `<context>`   - Record a word
//!   wordcard list                                  - List recorded words
//!   wordcard define `<word>` [--format `<format>`]     - Show a recorded word
//!   wordcard master `<word>`                         - Mark a word as mastered
//!   wordcard delete `<word>`                         - Delete a recorded word
//!   wordcard dump                                  - Print every recorded word, readable
//!   wordcard ui                                    - Open the interactive terminal UI
mod commands;
mod logging;
mod viewer;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use wordcard::api::{ApiClient, ApiError};
use wordcard::config::{Loader, WordcardConfig};

#[derive(Parser)]
#[command(name = "wordcard")]
#[command(version, about = "Record vocabulary words together with the passage they came from")]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Root URL of the word backend (overrides api.base_url)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the rebuilt context and the words of a passage
    Tokenize {
        /// The passage, quoted
        text: String,
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Record a word with its context
    Record {
        /// The word; non-letters are stripped before sending
        word: String,
        /// The passage the word was picked from
        #[arg(long)]
        context: String,
    },
    /// List recorded words
    List,
    /// Show a recorded word with its definitions and contexts
    Define {
        word: String,
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Mark a recorded word as mastered
    Master { word: String },
    /// Delete a recorded word
    Delete { word: String },
    /// Print every recorded word in readable form
    Dump,
    /// Open the interactive terminal UI
    Ui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid log level '{0}'")]
    LogLevel(String),

    #[error("'{0}' has no letters to record")]
    EmptyWord(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let config = load_config(&cli)?;

    let success = match cli.command {
        Command::Tokenize { text, format } => {
            commands::tokenize(&text, format)?;
            true
        }
        Command::Ui => {
            let client = ApiClient::new(&config.api.base_url)?;
            let runtime = tokio::runtime::Runtime::new()?;
            logging::init_for_ui(&config.logging, cli.verbose)?;
            info!(base_url = %client.base_url(), "starting terminal UI");
            viewer::viewer_main::run_viewer(client, &config.ui, runtime.handle().clone())?;
            true
        }
        Command::Record { word, context } => {
            let (client, runtime) = connect(&config, cli.verbose)?;
            runtime.block_on(commands::record(&client, &word, &context))?
        }
        Command::List => {
            let (client, runtime) = connect(&config, cli.verbose)?;
            runtime.block_on(commands::list(&client))?
        }
        Command::Define { word, format } => {
            let (client, runtime) = connect(&config, cli.verbose)?;
            runtime.block_on(commands::define(&client, &word, format))?
        }
        Command::Master { word } => {
            let (client, runtime) = connect(&config, cli.verbose)?;
            runtime.block_on(commands::master(&client, &word))?
        }
        Command::Delete { word } => {
            let (client, runtime) = connect(&config, cli.verbose)?;
            runtime.block_on(commands::delete(&client, &word))?
        }
        Command::Dump => {
            let (client, runtime) = connect(&config, cli.verbose)?;
            runtime.block_on(commands::dump(&client))?
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Client, runtime and stderr logging for a one-shot backend command
fn connect(
    config: &WordcardConfig,
    verbose: bool,
) -> Result<(ApiClient, tokio::runtime::Runtime), AppError> {
    let client = ApiClient::new(&config.api.base_url)?;
    let runtime = tokio::runtime::Runtime::new()?;
    logging::init_stderr(&config.logging, verbose)?;
    Ok((client, runtime))
}

fn load_config(cli: &Cli) -> Result<WordcardConfig, AppError> {
    let mut loader = Loader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if let Some(base_url) = &cli.base_url {
        loader = loader.set_override("api.base_url", base_url.as_str())?;
    }
    Ok(loader.build()?)
}
