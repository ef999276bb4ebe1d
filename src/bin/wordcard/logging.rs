//! tracing subscriber setup
//!
//! One-shot commands log to stderr. The terminal UI owns the screen, so it logs to
//! the configured file or not at all.

use crate::AppError;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing::Level;
use wordcard::config::LoggingConfig;

fn level(config: &LoggingConfig, verbose: bool) -> Result<Level, AppError> {
    if verbose {
        return Ok(Level::DEBUG);
    }
    config
        .level
        .parse::<Level>()
        .map_err(|_| AppError::LogLevel(config.level.clone()))
}

pub fn init_stderr(config: &LoggingConfig, verbose: bool) -> Result<(), AppError> {
    let level = level(config, verbose)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

pub fn init_for_ui(config: &LoggingConfig, verbose: bool) -> Result<(), AppError> {
    let level = level(config, verbose)?;
    let Some(path) = config.file_path() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .init();
    Ok(())
}
