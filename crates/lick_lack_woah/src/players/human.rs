//! Human player typing coordinate pairs.

use super::Player;
use crate::console::{Console, GameEvent, MoveSource};
use anyhow::Result;
use lick_lack_rules::{GameState, Move, parse_move};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};

/// Human player reading one line per attempt.
///
/// Keeps prompting until a line parses into a legal move.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R> HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Creates a new human player over a line source.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        let name = name.into();
        info!(name = %name, "Creating human player");
        Self { name, input }
    }
}

#[async_trait::async_trait]
impl<R> Player for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    #[instrument(skip_all)]
    async fn get_move(&mut self, state: &GameState, console: &mut Console) -> Result<Move> {
        loop {
            console.show(&GameEvent::Prompt(state.user_mark()))?;

            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 {
                anyhow::bail!("Input closed before a move was entered");
            }

            match parse_move(&line, state) {
                Ok(mv) => return Ok(mv),
                Err(reason) => {
                    debug!(player = %self.name, input = %line.trim_end(), %reason, "Rejected input");
                    console.show(&GameEvent::Rejected(reason))?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn source(&self) -> MoveSource {
        MoveSource::Human
    }
}
