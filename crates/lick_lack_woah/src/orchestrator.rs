//! Game orchestration between the user and the computer.

use crate::console::{Console, GameEvent};
use crate::players::Player;
use crate::rng::GameRng;
use anyhow::Result;
use lick_lack_rules::{GameState, Mark};
use tracing::{debug, info, instrument};

/// Picks the user's mark: the override if given, otherwise a coin flip.
#[instrument(skip(rng))]
pub fn assign_user_mark(forced: Option<Mark>, rng: &mut GameRng) -> Mark {
    forced.unwrap_or_else(|| if rng.coin_flip() { Mark::W } else { Mark::L })
}

/// Runs one game between a user and a computer player.
///
/// Turns go by mark: `W` moves first, then `L`, whichever of the two
/// players holds it.
pub struct Orchestrator {
    state: GameState,
    user: Box<dyn Player>,
    computer: Box<dyn Player>,
    console: Console,
}

impl Orchestrator {
    /// Creates a new orchestrator with an empty board.
    pub fn new(
        user_mark: Mark,
        user: Box<dyn Player>,
        computer: Box<dyn Player>,
        console: Console,
    ) -> Self {
        Self {
            state: GameState::new(user_mark),
            user,
            computer,
            console,
        }
    }

    /// Runs the game loop until a win or draw, returning the final state.
    #[instrument(skip(self), fields(user_mark = %self.state.user_mark()))]
    pub async fn run(mut self) -> Result<GameState> {
        info!(user = %self.user.name(), computer = %self.computer.name(), "Starting game orchestration");

        self.console.show(&GameEvent::Welcome)?;
        self.console.show(&GameEvent::Board(*self.state.board()))?;
        self.console.show(&GameEvent::Assigned(self.state.user_mark()))?;

        let mut to_move = Mark::FIRST;
        let status = loop {
            let player = if to_move == self.state.user_mark() {
                &mut self.user
            } else {
                &mut self.computer
            };

            debug!(player = %player.name(), mark = %to_move, "Waiting for move");
            let mv = player.get_move(&self.state, &mut self.console).await?;

            anyhow::ensure!(
                mv.mark() == to_move,
                "{} played {} on {}'s turn",
                player.name(),
                mv.mark(),
                to_move
            );
            anyhow::ensure!(
                self.state.board().is_empty(mv.position()),
                "{} played on occupied cell {}",
                player.name(),
                mv.position()
            );

            self.console.show(&GameEvent::MoveMade {
                source: player.source(),
                mv,
            })?;
            self.state = self.state.apply(mv);
            self.console.show(&GameEvent::Board(*self.state.board()))?;

            let status = self.state.status();
            if status.is_over() {
                break status;
            }
            to_move = to_move.opponent();
        };

        info!(?status, moves = self.state.history().len(), "Game over");
        self.console.show(&GameEvent::GameOver(status))?;
        Ok(self.state)
    }
}
