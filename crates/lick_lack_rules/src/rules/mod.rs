//! Game rules for Lick-Lack-Woah.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board
//! storage so they can be tested on hand-built positions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board: a completed line wins, otherwise a full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
