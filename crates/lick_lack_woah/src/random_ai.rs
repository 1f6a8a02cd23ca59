//! Random move selection for the computer opponent.

use crate::rng::GameRng;
use lick_lack_rules::{Board, Position};
use tracing::instrument;

/// Picks an empty position uniformly at random.
///
/// Returns `None` only when the board is full.
#[instrument(skip_all)]
pub fn pick_move(board: &Board, rng: &mut GameRng) -> Option<Position> {
    rng.choose(&board.empty_positions()).copied()
}
