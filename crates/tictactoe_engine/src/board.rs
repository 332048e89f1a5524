//! N×N board storage and the single mutation entry point.

use crate::error::{BoardError, MoveError};
use crate::observer::SharedObserver;
use crate::rules;
use crate::types::{Cell, Coordinate, Symbol};
use tracing::{debug, instrument, warn};

/// Side length of the classic board.
pub const STANDARD_SIZE: usize = 3;

/// Square tic-tac-toe board.
///
/// Cells are kept in row-major order. The size is fixed at construction and
/// every stored coordinate lies in `[0, size)`.
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    observers: Vec<SharedObserver>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self::empty(size))
    }

    /// Creates an empty 3×3 board.
    pub fn standard() -> Self {
        Self::empty(STANDARD_SIZE)
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            observers: Vec::new(),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Looks up a cell, returning `None` outside the board.
    pub fn get(&self, coordinate: Coordinate) -> Option<Cell> {
        self.index(coordinate).map(|i| self.cells[i])
    }

    /// Looks up a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if the coordinate is outside the board.
    pub fn get_cell(&self, coordinate: Coordinate) -> Result<Cell, MoveError> {
        self.get(coordinate).ok_or(MoveError::OutOfRange {
            coordinate,
            size: self.size,
        })
    }

    /// Places `symbol` at `coordinate` and notifies observers.
    ///
    /// Legality is decided by [`rules::validate_move`]. A rejected move leaves
    /// the board untouched and fires no notification.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if the coordinate is outside the board.
    /// - [`MoveError::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn update_board(&mut self, coordinate: Coordinate, symbol: Symbol) -> Result<(), MoveError> {
        rules::validate_move(self, coordinate)?;

        let index = self.index(coordinate).ok_or(MoveError::OutOfRange {
            coordinate,
            size: self.size,
        })?;
        self.cells[index] = Cell::Occupied(symbol);
        debug!(%coordinate, %symbol, "Cell updated");

        self.notify_observers();
        Ok(())
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Free coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(i, _)| Coordinate::new(i / size, i % size))
    }

    /// Registers an observer. Notification follows registration order.
    pub fn add_observer(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Calls every observer's update hook in registration order.
    ///
    /// Every observer must be free to borrow while the board notifies;
    /// debug builds panic on a busy observer.
    pub fn notify_observers(&self) {
        for (position, observer) in self.observers.iter().enumerate() {
            let borrowed = observer.try_borrow_mut();
            debug_assert!(
                borrowed.is_ok(),
                "observer {position} notified while busy"
            );
            match borrowed {
                Ok(mut observer) => observer.update(self),
                Err(_) => warn!(position, "Observer busy, skipping notification"),
            }
        }
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        (coordinate.row < self.size && coordinate.col < self.size)
            .then(|| coordinate.row * self.size + coordinate.col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("cells", &self.cells)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Renders one row per line, cells separated by spaces, `-` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::BoardObserver;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Counter {
        seen: usize,
    }

    impl BoardObserver for Counter {
        fn update(&mut self, _board: &Board) {
            self.seen += 1;
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.cells().len(), 16);
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert!(!board.is_full());
    }

    #[test]
    fn test_standard_matches_new() {
        let standard = Board::standard();
        let sized = Board::new(STANDARD_SIZE).unwrap();
        assert_eq!(standard.size(), sized.size());
        assert_eq!(standard.cells(), sized.cells());
        assert_eq!(standard.observer_count(), 0);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0).unwrap_err(), BoardError::InvalidSize { size: 0 });
    }

    #[test]
    fn test_get_cell_out_of_range() {
        let board = Board::standard();
        let result = board.get_cell(Coordinate::new(3, 0));
        assert!(matches!(result, Err(MoveError::OutOfRange { size: 3, .. })));
        assert_eq!(board.get(Coordinate::new(0, 3)), None);
    }

    #[test]
    fn test_update_sets_cell() {
        let mut board = Board::standard();
        board.update_board(Coordinate::new(1, 2), Symbol::X).unwrap();
        assert_eq!(
            board.get_cell(Coordinate::new(1, 2)).unwrap(),
            Cell::Occupied(Symbol::X)
        );
        assert_eq!(board.cells()[5], Cell::Occupied(Symbol::X));
    }

    #[test]
    fn test_occupied_cell_is_not_overwritten() {
        let mut board = Board::standard();
        board.update_board(Coordinate::new(0, 0), Symbol::X).unwrap();

        let result = board.update_board(Coordinate::new(0, 0), Symbol::O);
        assert_eq!(
            result,
            Err(MoveError::Occupied {
                coordinate: Coordinate::new(0, 0),
                by: Symbol::X,
            })
        );
        assert_eq!(board.get(Coordinate::new(0, 0)), Some(Cell::Occupied(Symbol::X)));
    }

    #[test]
    fn test_rejected_update_does_not_notify() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut board = Board::standard();
        board.add_observer(counter.clone());

        board.update_board(Coordinate::new(0, 0), Symbol::X).unwrap();
        assert!(board.update_board(Coordinate::new(0, 0), Symbol::O).is_err());
        assert!(board.update_board(Coordinate::new(9, 9), Symbol::O).is_err());

        assert_eq!(counter.borrow().seen, 1);
    }

    #[test]
    fn test_each_accepted_update_notifies_once() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut board = Board::new(2).unwrap();
        board.add_observer(counter.clone());

        for (k, (row, col)) in [(1, 1), (0, 0), (1, 0)].into_iter().enumerate() {
            board.update_board(Coordinate::new(row, col), Symbol::O).unwrap();
            assert_eq!(counter.borrow().seen, k + 1);
            assert_eq!(board.empty_cells().count(), 3 - k);
        }
        assert!(board.update_board(Coordinate::new(2, 0), Symbol::X).is_err());
        assert_eq!(counter.borrow().seen, 3);
        assert_eq!(board.empty_cells().count(), 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "notified while busy")]
    fn test_busy_observer_panics_in_debug() {
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut board = Board::standard();
        board.add_observer(counter.clone());

        let _held = counter.borrow_mut();
        board.notify_observers();
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2).unwrap();
        for (i, coordinate) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().enumerate() {
            assert!(!board.is_full());
            let symbol = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            board
                .update_board(Coordinate::new(coordinate.0, coordinate.1), symbol)
                .unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(2).unwrap();
        board.update_board(Coordinate::new(0, 1), Symbol::O).unwrap();
        let free: Vec<_> = board.empty_cells().collect();
        assert_eq!(
            free,
            vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(1, 1)]
        );
    }

    #[test]
    fn test_display_uses_placeholder() {
        let mut board = Board::standard();
        board.update_board(Coordinate::new(0, 0), Symbol::X).unwrap();
        board.update_board(Coordinate::new(1, 1), Symbol::O).unwrap();
        assert_eq!(board.to_string(), "X - -\n- O -\n- - -\n");
    }
}
