//! Board configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::games::tictactoe::DEFAULT_CELEBRATION_DURATION;

/// Tunables for the board UI. Every field has a default, so an empty or
/// missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct BoardConfig {
    /// How long the confetti stays up after a win, in milliseconds.
    #[serde(default = "default_celebration_ms")]
    celebration_ms: u64,

    /// Number of confetti particles spawned per celebration.
    #[serde(default = "default_confetti_particles")]
    confetti_particles: usize,

    /// Redraw and animation interval, in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// Where tracing output goes (the terminal is owned by the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_celebration_ms() -> u64 {
    DEFAULT_CELEBRATION_DURATION.as_millis() as u64
}

fn default_confetti_particles() -> usize {
    120
}

fn default_tick_ms() -> u64 {
    50
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_board.log")
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            celebration_ms: default_celebration_ms(),
            confetti_particles: default_confetti_particles(),
            tick_ms: default_tick_ms(),
            log_file: default_log_file(),
        }
    }
}

impl BoardConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Display window for the celebration.
    pub fn celebration_duration(&self) -> Duration {
        Duration::from_millis(self.celebration_ms)
    }

    /// Tick interval for the event loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Overrides the celebration window.
    pub fn with_celebration_ms(mut self, ms: u64) -> Self {
        self.celebration_ms = ms;
        self
    }

    /// Overrides the tick interval.
    pub fn with_tick_ms(mut self, ms: u64) -> Self {
        self.tick_ms = ms;
        self
    }

    /// Overrides the log file location.
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
