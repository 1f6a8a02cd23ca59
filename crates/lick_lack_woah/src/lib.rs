//! Lick-Lack-Woah - three in a row against a random-move computer
//!
//! # Architecture
//!
//! - **Players**: a human typing `x,y` pairs and a computer picking
//!   random empty cells, both behind the [`Player`] trait
//! - **Orchestrator**: setup, the alternating turn loop and the final report
//! - **Console**: text output for every [`GameEvent`]
//! - **Config**: CLI flags layered over an optional TOML file
//!
//! Game rules live in the `lick_lack_rules` crate.
//!
//! # Example
//!
//! ```no_run
//! use lick_lack_woah::{Console, GameRng, HumanPlayer, Orchestrator, RandomAi, assign_user_mark};
//! use tokio::io::BufReader;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut rng = GameRng::new(42);
//! let user_mark = assign_user_mark(None, &mut rng);
//! let user = HumanPlayer::new("You", BufReader::new(tokio::io::stdin()));
//! let computer = RandomAi::new("AI", rng);
//!
//! let game = Orchestrator::new(user_mark, Box::new(user), Box::new(computer), Console::stdio());
//! let final_state = game.run().await?;
//! println!("{:?}", final_state.status());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod orchestrator;
mod players;
mod random_ai;
mod rng;

pub use config::{ConfigError, GameConfig};
pub use console::{Console, GameEvent, MoveSource, OutputBuffer, WELCOME};
pub use orchestrator::{Orchestrator, assign_user_mark};
pub use players::{HumanPlayer, Player, RandomAi};
pub use random_ai::pick_move;
pub use rng::GameRng;
