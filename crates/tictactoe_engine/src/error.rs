//! Error types for the game engine.

use crate::types::{Coordinate, Symbol};

/// Why a move could not be applied to the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("Coordinate {coordinate} is outside the {size}x{size} board")]
    OutOfRange {
        /// Requested coordinate.
        coordinate: Coordinate,
        /// Board size.
        size: usize,
    },

    /// The cell is already taken.
    #[display("Cell {coordinate} is already occupied by {by}")]
    Occupied {
        /// Requested coordinate.
        coordinate: Coordinate,
        /// Mark already in the cell.
        by: Symbol,
    },

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// Board construction failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Boards need at least one row and column.
    #[display("Board size must be at least 1, got {size}")]
    InvalidSize {
        /// Requested size.
        size: usize,
    },
}

/// A move source could not produce a coordinate.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlayerError {
    /// Input was not a usable coordinate.
    #[display("'{input}' is not a valid number")]
    MalformedInput {
        /// The offending input.
        input: String,
    },

    /// The move source has nothing left to offer.
    #[display("Input closed before a move was made")]
    InputClosed,

    /// Reading input or writing a prompt failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Errors that end the game loop.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The current player failed to produce a move.
    #[display("Player error: {_0}")]
    Player(PlayerError),

    /// The presenter failed to write.
    #[display("Presenter error: {_0}")]
    Presenter(std::io::Error),

    /// A player was handed the wrong seat.
    #[display("Expected a player for {expected}, got one playing {found}")]
    SymbolMismatch {
        /// Seat being filled.
        expected: Symbol,
        /// Symbol the player reported.
        found: Symbol,
    },

    /// A turn was requested after the game ended.
    #[display("Game is already over")]
    GameOver,
}

impl From<PlayerError> for GameError {
    fn from(err: PlayerError) -> Self {
        Self::Player(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Presenter(err)
    }
}
