//! Deterministic player that takes the first empty cell.

use super::Player;
use anyhow::Result;
use strictly_sos::Game;
use tracing::debug;

/// Picks the first empty cell in row-major order.
#[derive(Debug, Clone, derive_new::new)]
pub struct FirstEmptyPlayer {
    #[new(into)]
    name: String,
}

impl Player for FirstEmptyPlayer {
    fn choose_move(&mut self, game: &Game) -> Result<(isize, isize)> {
        let Some(&(row, col)) = game.valid_moves().first() else {
            anyhow::bail!("No valid moves available");
        };
        debug!(player = %self.name, row, col, "Chose first empty cell");
        Ok((isize::try_from(row)?, isize::try_from(col)?))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
