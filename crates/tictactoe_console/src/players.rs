//! Player construction.

use crate::human::{HumanPlayer, SharedInput};
use std::io::{BufRead, Write};
use tictactoe_engine::{Coordinate, Player, ScriptedPlayer, Symbol};
use tracing::info;

/// Where a seat gets its moves from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerKind {
    /// Reads row and column from the shared console input.
    Human,
    /// Replays a fixed list of coordinates.
    Scripted(Vec<Coordinate>),
}

/// Builds the player for `symbol`'s seat.
///
/// Human seats read from `input` and prompt on `prompt`; pass the same
/// `input` for both seats so they take turns on one console.
pub fn create_player<R, W>(
    kind: PlayerKind,
    symbol: Symbol,
    input: &SharedInput<R>,
    prompt: W,
) -> Box<dyn Player>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    info!(%symbol, ?kind, "Creating player");
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(symbol, input.clone(), prompt)),
        PlayerKind::Scripted(moves) => Box::new(ScriptedPlayer::new(symbol, moves)),
    }
}
