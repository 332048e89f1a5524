//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Player X (goes first unless configured otherwise).
    #[serde(alias = "x")]
    X,
    /// Player O.
    #[serde(alias = "o")]
    O,
}

impl Symbol {
    /// Returns the opponent's symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Symbol),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "-"),
            Cell::Occupied(symbol) => write!(f, "{}", symbol),
        }
    }
}

/// A (row, col) position on the board, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, new,
)]
#[display("({row}, {col})")]
pub struct Coordinate {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

/// A player placing their mark at a coordinate.
///
/// Moves are transient: the game loop builds one per attempt for logging
/// and for reporting rejections, and never stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new, derive_more::Display)]
#[display("{symbol} -> {coordinate}")]
pub struct Move {
    /// The player making the move.
    symbol: Symbol,
    /// Where the mark goes.
    coordinate: Coordinate,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a completed line.
    Won(Symbol),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            GameStatus::Won(symbol) => Some(symbol),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "Game in progress"),
            GameStatus::Won(symbol) => write!(f, "Player {} wins!", symbol),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}
