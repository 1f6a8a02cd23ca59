//! Win detection.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The eight winning lines: rows top-to-bottom, columns left-to-right,
/// then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark holding the first complete line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Marked(mark) if board.get(b) == Cell::Marked(mark) && board.get(c) == Cell::Marked(mark) => {
            Some(mark)
        }
        _ => None,
    })
}
