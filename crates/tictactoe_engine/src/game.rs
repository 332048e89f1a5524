//! Turn loop for a two-player game.

use crate::board::Board;
use crate::error::{GameError, MoveError};
use crate::player::Player;
use crate::presenter::Presenter;
use crate::rules;
use crate::types::{Coordinate, GameStatus, Move, Symbol};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Shared handle to a seated player.
///
/// The same allocation sits in the board's observer list, so the loop never
/// holds a borrow across [`Board::update_board`].
pub type SharedPlayer = Rc<RefCell<dyn Player>>;

/// Two players taking turns on one board.
///
/// State machine: `InProgress` until a move completes a line (`Won`) or
/// fills the board (`Draw`). Both terminal states are final.
pub struct Game {
    board: Board,
    player_x: SharedPlayer,
    player_o: SharedPlayer,
    current: Symbol,
    status: GameStatus,
    moves_played: usize,
}

impl Game {
    /// Seats both players and registers them as board observers (X first).
    ///
    /// X moves first; see [`Game::starting_with`] to change that.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SymbolMismatch`] if a player does not play the
    /// symbol of its seat.
    #[instrument(skip_all, fields(size = board.size()))]
    pub fn new<X, O>(mut board: Board, player_x: X, player_o: O) -> Result<Self, GameError>
    where
        X: Player + 'static,
        O: Player + 'static,
    {
        for (expected, found) in [(Symbol::X, player_x.symbol()), (Symbol::O, player_o.symbol())] {
            if expected != found {
                return Err(GameError::SymbolMismatch { expected, found });
            }
        }

        let player_x = Rc::new(RefCell::new(player_x));
        let player_o = Rc::new(RefCell::new(player_o));
        board.add_observer(player_x.clone());
        board.add_observer(player_o.clone());

        debug!(observers = board.observer_count(), "Players seated");
        Ok(Self {
            board,
            player_x,
            player_o,
            current: Symbol::X,
            status: GameStatus::InProgress,
            moves_played: 0,
        })
    }

    /// Chooses who moves first. Only meaningful before the first move.
    pub fn starting_with(mut self, first: Symbol) -> Self {
        if self.moves_played == 0 {
            self.current = first;
        }
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Symbol of the player to move (or who made the final move).
    pub fn current_symbol(&self) -> Symbol {
        self.current
    }

    /// Number of moves applied so far.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Plays one turn for the current player.
    ///
    /// Rejected moves are reported to the presenter and the same player is
    /// asked again; the turn only ends once a move is applied.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game has already ended.
    /// - [`GameError::Player`] if the player cannot produce a move.
    /// - [`GameError::Presenter`] if the presenter fails to write.
    #[instrument(skip(self, presenter), fields(current = %self.current, turn = self.moves_played + 1))]
    pub fn play_turn(&mut self, presenter: &mut dyn Presenter) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        presenter.show_board(&self.board)?;
        presenter.announce_turn(self.current)?;

        let player = Rc::clone(self.seat(self.current));
        loop {
            let coordinate = player.borrow_mut().next_move(&self.board)?;
            let attempt = Move::new(self.current, coordinate);

            match self.board.update_board(coordinate, self.current) {
                Ok(()) => {
                    debug!(%attempt, "Move applied");
                    break;
                }
                Err(error) => {
                    warn!(%attempt, %error, "Move rejected, asking again");
                    presenter.reject_move(attempt, &error)?;
                }
            }
        }

        self.moves_played += 1;
        self.status = rules::evaluate(&self.board, self.current);
        if !self.status.is_terminal() {
            self.current = self.current.opponent();
        }

        Ok(self.status)
    }

    /// Plays turns until the game is won or drawn, then reports the outcome.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Game::play_turn`] or the presenter.
    #[instrument(skip_all, fields(size = self.board.size()))]
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> Result<GameStatus, GameError> {
        info!(first = %self.current, "Starting game");

        let status = loop {
            let status = self.play_turn(presenter)?;
            if status.is_terminal() {
                break status;
            }
        };

        presenter.show_board(&self.board)?;
        presenter.announce_outcome(status)?;

        info!(%status, moves = self.moves_played, "Game finished");
        Ok(status)
    }

    /// Applies `moves` alternately starting with X, without players or a presenter.
    ///
    /// Stops at the first terminal state and returns the board with it.
    ///
    /// # Errors
    ///
    /// Returns the board's [`MoveError`] for an illegal move, or
    /// [`MoveError::GameOver`] if moves remain after the game ended.
    #[instrument(skip(board))]
    pub fn replay(
        mut board: Board,
        moves: &[Coordinate],
    ) -> Result<(Board, GameStatus), MoveError> {
        let mut symbol = Symbol::X;
        let mut status = GameStatus::InProgress;

        for &coordinate in moves {
            if status.is_terminal() {
                return Err(MoveError::GameOver);
            }
            board.update_board(coordinate, symbol)?;
            status = rules::evaluate(&board, symbol);
            symbol = symbol.opponent();
        }

        Ok((board, status))
    }

    fn seat(&self, symbol: Symbol) -> &SharedPlayer {
        match symbol {
            Symbol::X => &self.player_x,
            Symbol::O => &self.player_o,
        }
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("current", &self.current)
            .field("status", &self.status)
            .field("moves_played", &self.moves_played)
            .finish()
    }
}
