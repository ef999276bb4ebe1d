//! Configuration loading
//!
//! Settings come in three sections: `api` (where the backend lives), `ui`
//! (notification lifetime, input poll interval) and `logging`. The values in
//! `defaults/wordcard.default.toml` are compiled in; see [`Loader`] for what can
//! be layered over them.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TOML: &str = include_str!("../defaults/wordcard.default.toml");

/// Prefix of environment overrides, e.g. `WORDCARD__API__BASE_URL`
pub const ENV_PREFIX: &str = "WORDCARD";

#[derive(Debug, Clone, Deserialize)]
pub struct WordcardConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub notification_ms: u64,
    pub tick_ms: u64,
}

impl UiConfig {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

impl LoggingConfig {
    /// Log file for UI mode; None when unset
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.file.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.file))
        }
    }
}

/// Builds a [`WordcardConfig`] from layered sources
///
/// Later layers win: embedded defaults, then files in the order added, then
/// `WORDCARD__*` variables, then explicit overrides such as `--base-url`.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Add a TOML file the user asked for; `build` fails if it does not exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Add a TOML file that may be absent, e.g. a per-user settings file
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// Read `WORDCARD__<SECTION>__<KEY>`, e.g. `WORDCARD__UI__TICK_MS=50`
    pub fn with_env(mut self) -> Self {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(env);
        self
    }

    /// Pin `key` (dotted, e.g. `api.base_url`) over every other layer
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<WordcardConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone, with no file or environment layer
pub fn load_defaults() -> Result<WordcardConfig, ConfigError> {
    Loader::new().build()
}
