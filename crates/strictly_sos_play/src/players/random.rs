//! Player that samples random cells until one is legal.

use super::Player;
use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strictly_sos::Game;
use tracing::{debug, instrument};

/// Samples uniformly over the whole board, retrying until the cell is legal.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    /// Creates a random player, seeded for reproducible games when a seed is
    /// given.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, game: &Game) -> Result<(isize, isize)> {
        if game.valid_moves().is_empty() {
            anyhow::bail!("No valid moves available");
        }

        let size = isize::try_from(game.board_size())?;
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let row = self.rng.gen_range(0..size);
            let col = self.rng.gen_range(0..size);
            if game.is_valid_move(row, col) {
                debug!(player = %self.name, row, col, attempts, "Chose random cell");
                return Ok((row, col));
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
