//! Lick-Lack-Woah - terminal entry point.

use anyhow::Result;
use clap::Parser;
use lick_lack_rules::GameStatus;
use lick_lack_woah::cli::Cli;
use lick_lack_woah::{
    Console, GameConfig, GameRng, HumanPlayer, Orchestrator, RandomAi, assign_user_mark,
};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::resolve(&cli)?;
    let status = play(config).await?;
    info!(?status, "Exiting");

    Ok(())
}

/// Plays one game on stdin/stdout.
#[instrument(skip_all)]
async fn play(config: GameConfig) -> Result<GameStatus> {
    let mut rng = match config.seed() {
        Some(seed) => GameRng::new(*seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "Game RNG ready");

    let user_mark = assign_user_mark(*config.user_mark(), &mut rng);
    let user = HumanPlayer::new("You", BufReader::new(tokio::io::stdin()));
    let computer = RandomAi::new("AI", rng).with_delay(config.ai_delay());

    let game = Orchestrator::new(user_mark, Box::new(user), Box::new(computer), Console::stdio());
    let final_state = game.run().await?;

    Ok(final_state.status())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
