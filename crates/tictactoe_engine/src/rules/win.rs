//! Win detection for any board size.

use crate::board::Board;
use crate::types::{Cell, Coordinate, Symbol};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `symbol` fills a complete row, column or diagonal.
///
/// For each index `i` the row `i` and column `i` are tested; the main
/// diagonal `(i, i)` and anti-diagonal `(i, n-1-i)` are tested once.
/// Stops at the first complete line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_win(board: &Board, symbol: Symbol) -> bool {
    let n = board.size();
    let owns = |row: usize, col: usize| {
        board.get(Coordinate::new(row, col)) == Some(Cell::Occupied(symbol))
    };

    (0..n).any(|i| (0..n).all(|j| owns(i, j)) || (0..n).all(|j| owns(j, i)))
        || (0..n).all(|i| owns(i, i))
        || (0..n).all(|i| owns(i, n - 1 - i))
}

/// Returns the symbol holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Symbol> {
    Symbol::iter().find(|&symbol| check_win(board, symbol))
}
