//! Game orchestration between players.

use crate::players::{Player, color_name};
use crate::recorder::MoveSink;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_sos::{Game, Move, Outcome, Scoreboard, Symbol};
use tracing::{debug, info, instrument, warn};

/// What a finished round looked like just before the reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// Winner or draw.
    pub outcome: Outcome,
    /// Sequence counts behind the outcome.
    pub scores: Scoreboard,
    /// Every move of the round, oldest first.
    pub moves: Vec<Move>,
}

/// Drives a game: asks players for moves, applies them, records them and
/// announces the outcome.
pub struct Orchestrator<W> {
    game: Game,
    red: Box<dyn Player>,
    blue: Box<dyn Player>,
    sink: Box<dyn MoveSink>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator. `red` moves for `S`, `blue` for `O`.
    pub fn new(
        game: Game,
        red: Box<dyn Player>,
        blue: Box<dyn Player>,
        sink: Box<dyn MoveSink>,
        out: W,
    ) -> Self {
        Self {
            game,
            red,
            blue,
            sink,
            out,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays `rounds` complete games.
    #[instrument(skip(self))]
    pub fn run(&mut self, rounds: u32) -> Result<Vec<RoundSummary>> {
        info!("Starting game orchestration");
        let mut summaries = Vec::new();
        for round in 1..=rounds {
            if rounds > 1 {
                writeln!(self.out, "Round {} of {}", round, rounds)?;
            }
            summaries.push(self.play_round()?);
        }
        Ok(summaries)
    }

    /// Plays until the game ends, announces the outcome and resets the game.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<RoundSummary> {
        write!(self.out, "{}", self.game.board().display())?;

        loop {
            let symbol = self.game.current_symbol();
            let player = match symbol {
                Symbol::S => &mut self.red,
                Symbol::O => &mut self.blue,
            };

            debug!(player = %player.name(), "Waiting for move");
            let (row, col) = player
                .choose_move(&self.game)
                .with_context(|| format!("{} could not move", player.name()))?;

            if !self.game.is_valid_move(row, col) {
                if player.is_interactive() {
                    warn!(player = %player.name(), row, col, "Illegal move, asking again");
                    writeln!(
                        self.out,
                        "({}, {}) is not an empty cell on the board, try again.",
                        row, col
                    )?;
                    continue;
                }
                anyhow::bail!("{} chose illegal cell ({}, {})", player.name(), row, col);
            }

            let name = player.name().to_string();
            self.game.place_symbol(row, col)?;
            self.sink.record(&self.game);
            self.game.switch_turn();

            info!(player = %name, %symbol, row, col, "Move made");
            writeln!(self.out, "{} placed {} at ({}, {})", name, symbol, row, col)?;
            write!(self.out, "{}", self.game.board().display())?;

            if self.game.is_game_over() {
                return self.finish_round();
            }
        }
    }

    fn finish_round(&mut self) -> Result<RoundSummary> {
        let scores = self.game.scores();
        let outcome = self.game.determine_winner();
        let summary = RoundSummary {
            outcome,
            scores,
            moves: self.game.history().to_vec(),
        };

        info!(%outcome, moves = summary.moves.len(), "Game over");
        writeln!(
            self.out,
            "{} (S: {}, O: {})",
            announcement(outcome),
            scores.s,
            scores.o
        )?;

        self.game.reset_game();
        Ok(summary)
    }
}

/// The end-of-game message, naming the color behind the winning symbol.
pub fn announcement(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(symbol) => format!("{} [{}]", outcome, color_name(symbol)),
        Outcome::Draw => outcome.to_string(),
    }
}
