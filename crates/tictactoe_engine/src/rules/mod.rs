//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): move legality, line
//! completion and draw detection. None of them mutate the board.

pub mod draw;
pub mod status;
pub mod validate;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::evaluate;
pub use validate::{is_valid_move, validate_move};
pub use win::{check_win, winner};
