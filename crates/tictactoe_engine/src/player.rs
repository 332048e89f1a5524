//! Player trait and the scripted move source.

use crate::board::Board;
use crate::error::PlayerError;
use crate::observer::BoardObserver;
use crate::types::{Coordinate, Symbol};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// A seat at the table: produces coordinates for its symbol.
///
/// Players only propose moves. The game loop applies them through
/// [`Board::update_board`] and asks again if the board rejects one.
/// Every player is also a [`BoardObserver`], registered with the board
/// when the game is created.
pub trait Player: BoardObserver {
    /// The mark this player places.
    fn symbol(&self) -> Symbol;

    /// Display name.
    fn name(&self) -> &str;

    /// Obtains the next coordinate from this player's move source.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayerError`] if the source cannot produce a coordinate.
    fn next_move(&mut self, board: &Board) -> Result<Coordinate, PlayerError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn symbol(&self) -> Symbol {
        (**self).symbol()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn next_move(&mut self, board: &Board) -> Result<Coordinate, PlayerError> {
        (**self).next_move(board)
    }
}

/// Player that replays a fixed list of coordinates.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    name: String,
    symbol: Symbol,
    moves: VecDeque<Coordinate>,
    updates_seen: usize,
}

impl ScriptedPlayer {
    /// Creates a scripted player for `symbol`.
    pub fn new(symbol: Symbol, moves: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            name: format!("Player {}", symbol),
            symbol,
            moves: moves.into_iter().collect(),
            updates_seen: 0,
        }
    }

    /// Coordinates not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }

    /// Board notifications received so far.
    pub fn updates_seen(&self) -> usize {
        self.updates_seen
    }
}

impl BoardObserver for ScriptedPlayer {
    fn update(&mut self, _board: &Board) {
        self.updates_seen += 1;
    }
}

impl Player for ScriptedPlayer {
    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, _board), fields(player = %self.name))]
    fn next_move(&mut self, _board: &Board) -> Result<Coordinate, PlayerError> {
        let coordinate = self.moves.pop_front().ok_or(PlayerError::InputClosed)?;
        debug!(%coordinate, remaining = self.moves.len(), "Scripted move");
        Ok(coordinate)
    }
}
