//! Plain-text rendering of the game.

use std::io::{self, Write};
use tictactoe_engine::{Board, GameStatus, Move, MoveError, Presenter, Symbol};

/// Writes boards and messages to any writer, typically stdout.
#[derive(Debug)]
pub struct ConsolePresenter<W> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.out, "{}", board)?;
        self.out.flush()
    }

    fn announce_turn(&mut self, symbol: Symbol) -> io::Result<()> {
        writeln!(self.out, "Player {}'s turn:", symbol)
    }

    fn reject_move(&mut self, _attempt: Move, error: &MoveError) -> io::Result<()> {
        writeln!(self.out, "Invalid move: {}", error)
    }

    fn announce_outcome(&mut self, status: GameStatus) -> io::Result<()> {
        writeln!(self.out, "{}", status)?;
        self.out.flush()
    }
}
