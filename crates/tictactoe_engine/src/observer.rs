//! Board observers.

use crate::board::Board;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Something that wants to hear about every successful board mutation.
///
/// The board calls [`BoardObserver::update`] synchronously, in registration
/// order, right after a cell is filled. Rejected moves never notify.
pub trait BoardObserver {
    /// Called after each successful mutation. Does nothing by default.
    fn update(&mut self, board: &Board) {
        let _ = board;
    }
}

impl<O: BoardObserver + ?Sized> BoardObserver for Box<O> {
    fn update(&mut self, board: &Board) {
        (**self).update(board)
    }
}

/// Shared handle stored in a board's observer list.
pub type SharedObserver = Rc<RefCell<dyn BoardObserver>>;

/// Observer that emits a tracing event for every board change.
#[derive(Debug, Default)]
pub struct BoardLogger {
    updates: usize,
}

impl BoardLogger {
    /// Creates a logger that has seen no updates yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of updates observed.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl BoardObserver for BoardLogger {
    fn update(&mut self, board: &Board) {
        self.updates += 1;
        let filled = board.cells().iter().filter(|c| !c.is_empty()).count();
        debug!(update = self.updates, filled, full = board.is_full(), "Board changed");
    }
}
