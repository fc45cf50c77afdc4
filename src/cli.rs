//! Command-line interface for strictly_board.

use std::path::PathBuf;

use clap::Parser;
use strictly_board::{BoardConfig, ConfigError};

/// Strictly Board - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_board")]
#[command(about = "Interactive tic-tac-toe board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "strictly_board.toml")]
    pub config: PathBuf,

    /// Override how long the confetti stays up after a win
    #[arg(long)]
    pub celebration_ms: Option<u64>,

    /// Override the redraw interval
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Override where logs are written
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    pub fn resolve_config(&self) -> Result<BoardConfig, ConfigError> {
        let mut config = BoardConfig::load_or_default(&self.config)?;
        if let Some(ms) = self.celebration_ms {
            config = config.with_celebration_ms(ms);
        }
        if let Some(ms) = self.tick_ms {
            config = config.with_tick_ms(ms);
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        Ok(config)
    }
}
