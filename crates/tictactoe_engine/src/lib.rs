//! Tic-tac-toe rule engine.
//!
//! Pure game logic with no console I/O of its own.
//!
//! # Architecture
//!
//! - **Board**: N×N grid, single mutation entry point, observer notification
//! - **Rules**: move validation, win detection, draw detection
//! - **Player**: move sources (scripted here; the console crate adds a human one)
//! - **Game**: turn loop that re-prompts on rejected moves
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Coordinate, Game, GameStatus, Symbol};
//!
//! let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)].map(|(r, c)| Coordinate::new(r, c));
//! let (board, status) = Game::replay(Board::standard(), &moves).unwrap();
//!
//! assert_eq!(status, GameStatus::Won(Symbol::X));
//! assert!(!board.is_full());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod observer;
mod player;
mod presenter;
mod types;

pub mod rules;

pub use board::{Board, STANDARD_SIZE};
pub use error::{BoardError, GameError, MoveError, PlayerError};
pub use game::{Game, SharedPlayer};
pub use observer::{BoardLogger, BoardObserver, SharedObserver};
pub use player::{Player, ScriptedPlayer};
pub use presenter::Presenter;
pub use rules::{check_win, is_valid_move};
pub use types::{Cell, Coordinate, GameStatus, Move, Symbol};
