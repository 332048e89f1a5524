//! Presentation collaborator for the game loop.

use crate::board::Board;
use crate::error::MoveError;
use crate::types::{GameStatus, Move, Symbol};
use std::io;

/// Receives everything the game loop wants shown to the players.
pub trait Presenter {
    /// Renders the current board.
    fn show_board(&mut self, board: &Board) -> io::Result<()>;

    /// Announces whose turn it is.
    fn announce_turn(&mut self, symbol: Symbol) -> io::Result<()>;

    /// Reports a move the board refused. The same player moves again.
    fn reject_move(&mut self, attempt: Move, error: &MoveError) -> io::Result<()>;

    /// Reports the terminal outcome.
    fn announce_outcome(&mut self, status: GameStatus) -> io::Result<()>;
}
