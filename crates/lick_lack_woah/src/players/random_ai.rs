//! Computer player that picks a random empty cell.

use super::Player;
use crate::console::{Console, MoveSource};
use crate::random_ai::pick_move;
use crate::rng::GameRng;
use anyhow::Result;
use lick_lack_rules::{GameState, Move};
use std::time::Duration;
use tracing::{debug, instrument};

/// Random-move computer opponent.
pub struct RandomAi {
    name: String,
    rng: GameRng,
    delay: Duration,
}

impl RandomAi {
    /// Creates a new random AI drawing from `rng`.
    pub fn new(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
            delay: Duration::ZERO,
        }
    }

    /// Pause before each move to simulate thinking.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl Player for RandomAi {
    #[instrument(skip_all)]
    async fn get_move(&mut self, state: &GameState, _console: &mut Console) -> Result<Move> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let position = pick_move(state.board(), &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(ai = %self.name, %position, "AI chose position");

        Ok(Move::new(position, state.computer_mark()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> MoveSource {
        MoveSource::Computer
    }
}
