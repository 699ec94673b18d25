//! Strictly SOS - Unified CLI
//!
//! Play SOS in the terminal or replay a recorded game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_sos::{Game, GameMode};
use strictly_sos_play::cli::{Cli, Command, PlayArgs, ReplayArgs};
use strictly_sos_play::{FileRecorder, Orchestrator, PlayConfig, players, replay_file};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Replay(args) => run_replay(args),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_sos=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play rounds until the configured count is reached.
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::load(&args)?;
    let game_config = config.game_config()?;
    info!(
        board_size = *game_config.board_size(),
        mode = %game_config.mode(),
        red = %game_config.red(),
        blue = %game_config.blue(),
        "Starting SOS"
    );

    let (red, blue) = players::for_config(&game_config, *config.seed());
    let recorder = FileRecorder::new(config.record_path());

    let mut orchestrator = Orchestrator::new(
        Game::from_config(game_config),
        red,
        blue,
        Box::new(recorder),
        std::io::stdout(),
    );
    let summaries = orchestrator
        .run(*config.rounds())
        .context("Game aborted")?;

    info!(rounds = summaries.len(), "Finished playing");
    Ok(())
}

/// Print the position a recorded move log leads to.
#[instrument(skip_all, fields(file = %args.file.display()))]
fn run_replay(args: ReplayArgs) -> Result<()> {
    let report = replay_file(
        &args.file,
        args.size,
        GameMode::from_label(&args.mode),
        args.scoring,
    )?;
    println!("{}", report);
    Ok(())
}
