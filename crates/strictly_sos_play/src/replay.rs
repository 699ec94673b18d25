//! Rebuilding games from recorded move logs.

use anyhow::{Context, Result};
use std::path::Path;
use strictly_sos::{
    Game, GameConfig, GameMode, Move, Outcome, PlayerKind, ScoringRule, parse_move_log,
};
use tracing::{info, instrument};

/// A replayed game and what its final position means.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// The rebuilt game.
    pub game: Game,
    /// Whether the final position is terminal.
    pub over: bool,
    /// Outcome of the final position.
    pub outcome: Outcome,
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.game.board().display())?;
        let scores = self.game.scores();
        writeln!(
            f,
            "{} moves, S: {}, O: {}",
            self.game.history().len(),
            scores.s,
            scores.o
        )?;
        if self.over {
            write!(f, "{}", self.outcome)
        } else {
            write!(f, "Game still in progress, {} to move", self.game.current_symbol())
        }
    }
}

/// Smallest board holding every move.
fn inferred_size(moves: &[Move]) -> Result<i64> {
    let largest = moves.iter().map(|m| m.row.max(m.col)).max().unwrap_or(0);
    largest
        .checked_add(1)
        .and_then(|n| i64::try_from(n).ok())
        .with_context(|| format!("Recorded coordinate {} is too large for a board", largest))
}

/// Replays a move log held in memory.
#[instrument(skip(log))]
pub fn replay_log(
    log: &str,
    size: Option<i64>,
    mode: GameMode,
    scoring: ScoringRule,
) -> Result<ReplayReport> {
    let moves = parse_move_log(log)?;
    let size = match size {
        Some(size) => size,
        None => inferred_size(&moves)?,
    };
    let config = GameConfig::new(size, mode, PlayerKind::Human, PlayerKind::Human)?
        .with_scoring(scoring);

    let game = Game::replay(config, &moves)?;
    let over = game.is_game_over();
    let outcome = game.determine_winner();
    info!(moves = moves.len(), over, %outcome, "Game replayed");

    Ok(ReplayReport {
        game,
        over,
        outcome,
    })
}

/// Replays a recorded move-log file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn replay_file(
    path: impl AsRef<Path>,
    size: Option<i64>,
    mode: GameMode,
    scoring: ScoringRule,
) -> Result<ReplayReport> {
    let log = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
    replay_log(&log, size, mode, scoring)
}
