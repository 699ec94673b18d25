//! Command-line interface for strictly_sos_play.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_sos::ScoringRule;

/// Strictly SOS - play SOS in the terminal
#[derive(Parser, Debug)]
#[command(name = "sos")]
#[command(about = "Play SOS between humans and computer players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one or more rounds
    Play(PlayArgs),

    /// Rebuild a game from a recorded move log
    Replay(ReplayArgs),
}

/// Options for `play`. Anything given here overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length
    #[arg(short, long)]
    pub size: Option<i64>,

    /// Game mode ("simple" for runs of three, anything else for four)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Red player (S) type: human or computer
    #[arg(long)]
    pub red: Option<String>,

    /// Blue player (O) type: human or computer
    #[arg(long)]
    pub blue: Option<String>,

    /// Scoring rule: occupant or legacy
    #[arg(long)]
    pub scoring: Option<ScoringRule>,

    /// Number of rounds to play
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// File the move log is written to after every move
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Seed for computer players
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options for `replay`.
#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Recorded move log
    pub file: PathBuf,

    /// Board side length (defaults to the smallest board holding every move)
    #[arg(short, long)]
    pub size: Option<i64>,

    /// Game mode ("simple" for runs of three, anything else for four)
    #[arg(short, long, default_value = "simple")]
    pub mode: String,

    /// Scoring rule: occupant or legacy
    #[arg(long, default_value = "occupant")]
    pub scoring: ScoringRule,
}
