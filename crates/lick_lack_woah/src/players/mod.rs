//! Player trait and implementations.

mod human;
mod random_ai;

pub use human::HumanPlayer;
pub use random_ai::RandomAi;

use crate::console::{Console, MoveSource};
use anyhow::Result;
use lick_lack_rules::{GameState, Move};

/// Trait for anything that can supply moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets the next move for the current state.
    ///
    /// Implementations return only legal moves carrying their own mark.
    /// Any user-facing chatter goes through `console`.
    async fn get_move(&mut self, state: &GameState, console: &mut Console) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Where this player's moves come from.
    fn source(&self) -> MoveSource;
}
