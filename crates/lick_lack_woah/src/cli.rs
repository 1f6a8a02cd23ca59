//! Command-line interface for lick_lack_woah.

use clap::Parser;
use lick_lack_rules::Mark;
use std::path::PathBuf;

/// Lick-Lack-Woah - three in a row against a random-move computer
#[derive(Parser, Debug, Default)]
#[command(name = "lick_lack_woah")]
#[command(about = "Play Lick-Lack-Woah in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed the RNG for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play as this mark (W or L) instead of flipping a coin
    #[arg(short, long)]
    pub mark: Option<Mark>,

    /// Milliseconds the computer waits before moving
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,
}
