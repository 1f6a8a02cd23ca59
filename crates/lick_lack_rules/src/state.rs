//! Game state: the board plus who plays which mark.

use super::rules;
use super::{Board, GameStatus, Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete game state.
///
/// States are values: [`GameState::apply`] returns the next state and
/// leaves the current one untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    user_mark: Mark,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new(user_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            user_mark,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human player's mark.
    pub fn user_mark(&self) -> Mark {
        self.user_mark
    }

    /// The computer's mark, always the opposite of the user's.
    pub fn computer_mark(&self) -> Mark {
        self.user_mark.opponent()
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the current board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Returns the state after `mv`.
    ///
    /// The move is assumed legal; validation happens before this.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn apply(&self, mv: Move) -> GameState {
        let mut history = self.history.clone();
        history.push(mv);
        GameState {
            board: self.board.apply(mv.position, mv.mark),
            user_mark: self.user_mark,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_roles_hold_different_marks() {
        for mark in [Mark::W, Mark::L] {
            let state = GameState::new(mark);
            assert_eq!(state.user_mark(), mark);
            assert_ne!(state.user_mark(), state.computer_mark());
        }
    }

    #[test]
    fn test_apply_leaves_previous_state_untouched() {
        let before = GameState::new(Mark::W);
        let after = before.apply(Move::new(Position::Center, Mark::W));

        assert_eq!(before.board(), &Board::new());
        assert!(before.history().is_empty());
        assert_eq!(after.board().get(Position::Center), Cell::Marked(Mark::W));
        assert_eq!(after.history(), &[Move::new(Position::Center, Mark::W)]);
        assert_eq!(after.user_mark(), Mark::W);
    }
}
