//! Move legality.

use crate::board::Board;
use crate::error::MoveError;
use crate::types::{Cell, Coordinate};
use tracing::instrument;

/// Decides whether a mark may be placed at `coordinate`.
///
/// This is the single source of truth for legality: [`Board::update_board`]
/// calls it before every mutation.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if the coordinate is outside the board.
/// - [`MoveError::Occupied`] if the cell already holds a mark.
#[instrument(skip(board), fields(size = board.size()))]
pub fn validate_move(board: &Board, coordinate: Coordinate) -> Result<(), MoveError> {
    match board.get_cell(coordinate)? {
        Cell::Empty => Ok(()),
        Cell::Occupied(by) => Err(MoveError::Occupied { coordinate, by }),
    }
}

/// Legal iff the coordinate is on the board and the cell is empty.
pub fn is_valid_move(board: &Board, coordinate: Coordinate) -> bool {
    validate_move(board, coordinate).is_ok()
}
