//! Outcome after a move.

use super::draw::is_full;
use super::win::check_win;
use crate::board::Board;
use crate::types::{GameStatus, Symbol};
use tracing::instrument;

/// Derives the game status after `last` has moved.
///
/// Only the player who just moved can have completed a line, so only that
/// symbol is checked. A full board without that win is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last: Symbol) -> GameStatus {
    if check_win(board, last) {
        GameStatus::Won(last)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
