//! Moves as first-class values.
//!
//! A move is produced by a player, then applied to a
//! [`GameState`](crate::GameState) to get the next state.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the mark goes.
    pub position: Position,
    /// The mark being placed.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(position: Position, mark: Mark) -> Self {
        Self { position, mark }
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
