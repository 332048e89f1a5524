//! Game configuration: TOML file plus command-line overrides.

use crate::cli::Cli;
use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{Coordinate, STANDARD_SIZE, Symbol};
use tracing::{debug, info, instrument};

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board side length.
    board_size: usize,

    /// Symbol that moves first.
    first: Symbol,

    /// Move script for X; X reads the console when absent.
    x_moves: Option<String>,

    /// Move script for O; O reads the console when absent.
    o_moves: Option<String>,

    /// Log destination; stderr when absent.
    log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_SIZE,
            first: Symbol::X,
            x_moves: None,
            o_moves: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, first = %config.first, "Config loaded");
        Ok(config)
    }

    /// Builds the effective configuration: file (if given), then flags, then validation.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Replaces file values with any flags given on the command line.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(size) = cli.size {
            debug!(size, "Overriding board size");
            self.board_size = size;
        }
        if let Some(first) = cli.first {
            self.first = first;
        }
        if let Some(moves) = &cli.x_moves {
            self.x_moves = Some(moves.clone());
        }
        if let Some(moves) = &cli.o_moves {
            self.o_moves = Some(moves.clone());
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
    }

    /// Checks the board size and any move scripts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("Board size must be at least 1".to_string()));
        }
        for symbol in [Symbol::X, Symbol::O] {
            self.player_kind(symbol)?;
        }
        Ok(())
    }

    /// Which kind of player sits in `symbol`'s seat.
    pub fn player_kind(&self, symbol: Symbol) -> Result<PlayerKind, ConfigError> {
        let script = match symbol {
            Symbol::X => &self.x_moves,
            Symbol::O => &self.o_moves,
        };
        match script {
            Some(script) => Ok(PlayerKind::Scripted(parse_moves(script)?)),
            None => Ok(PlayerKind::Human),
        }
    }
}

/// Parses a move script such as `"0,0 1,1 2,2"`.
///
/// Moves are separated by whitespace or `;`, each written `row,col`.
pub fn parse_moves(script: &str) -> Result<Vec<Coordinate>, ConfigError> {
    script
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let (row, col) = token
                .split_once(',')
                .ok_or_else(|| ConfigError::new(format!("Invalid move '{}': expected row,col", token)))?;
            let parse = |part: &str| {
                part.trim().parse::<usize>().map_err(|_| {
                    ConfigError::new(format!("Invalid move '{}': '{}' is not a number", token, part))
                })
            };
            Ok(Coordinate::new(parse(row)?, parse(col)?))
        })
        .collect()
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
    /// Creates a new configuration error.
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
