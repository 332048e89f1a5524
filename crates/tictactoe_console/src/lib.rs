//! Console front end for the tic-tac-toe engine.
//!
//! Provides the human move source and the plain-text presenter, plus the
//! CLI, configuration and tracing setup used by the `tictactoe` binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod human;
mod logging;
mod players;
mod presenter;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, parse_moves};
pub use human::{HumanPlayer, SharedInput};
pub use logging::initialize_tracing;
pub use players::{PlayerKind, create_player};
pub use presenter::ConsolePresenter;
