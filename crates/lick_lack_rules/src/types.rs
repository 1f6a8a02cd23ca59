//! Core domain types for Lick-Lack-Woah.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the two marks a player can place.
///
/// `W` always moves first in a round, then `L`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark `W` (moves first).
    W,
    /// Mark `L` (moves second).
    L,
}

impl Mark {
    /// The mark that opens every game.
    pub const FIRST: Mark = Mark::W;

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::W => Mark::L,
            Mark::L => Mark::W,
        }
    }

    /// Single-character symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::W => 'W',
            Mark::L => 'L',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Single-character symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Marked(mark) => mark.symbol(),
        }
    }
}

/// 3x3 board stored as nine cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from raw cells (row-major).
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Empty positions in index order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Occupancy is not re-checked here; callers validate first.
    #[instrument(skip(self))]
    pub fn apply(&self, pos: Position, mark: Mark) -> Board {
        debug_assert!(self.is_empty(pos), "apply on occupied cell {pos}");
        let mut next = *self;
        next.cells[pos.to_index()] = Cell::Marked(mark);
        next
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}]", row[0].symbol(), row[1].symbol(), row[2].symbol())?;
        }
        Ok(())
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row.
    Won(Mark),
    /// Board is full and nobody won.
    Draw,
}

impl GameStatus {
    /// True once the game has a winner or is drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::W.opponent(), Mark::L);
        assert_eq!(Mark::L.opponent(), Mark::W);
    }

    #[test]
    fn test_mark_parses_case_insensitive() {
        assert_eq!("w".parse::<Mark>().unwrap(), Mark::W);
        assert_eq!("L".parse::<Mark>().unwrap(), Mark::L);
        assert!("x".parse::<Mark>().is_err());
    }

    #[test]
    fn test_mark_serde_uses_letter() {
        assert_eq!(serde_json::to_string(&Mark::W).unwrap(), "\"W\"");
        let mark: Mark = serde_json::from_str("\"L\"").unwrap();
        assert_eq!(mark, Mark::L);
    }

    #[test]
    fn test_apply_returns_new_board() {
        let board = Board::new();
        let next = board.apply(Position::Center, Mark::L);

        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Marked(Mark::L));
        assert_eq!(next.empty_positions().len(), 8);
    }

    #[test]
    fn test_is_full_only_when_no_empty_cell() {
        let almost = Position::ALL[..8]
            .iter()
            .fold(Board::new(), |b, &pos| b.apply(pos, Mark::W));
        assert!(!almost.is_full());
        assert!(almost.apply(Position::BottomRight, Mark::L).is_full());
    }

    #[test]
    fn test_render_three_rows() {
        let board = Board::new()
            .apply(Position::TopLeft, Mark::W)
            .apply(Position::BottomRight, Mark::L);

        assert_eq!(board.to_string(), "[W, -, -]\n[-, -, -]\n[-, -, L]");
    }
}
