//! Lifecycle and outcome types.

use super::Symbol;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are being accepted.
    Active,
    /// A terminal condition has been reached; only a reset continues play.
    Ended,
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Symbol with more completed sequences.
    Winner(Symbol),
    /// Neither symbol leads.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            Outcome::Winner(symbol) => Some(*symbol),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "Player {} wins!", symbol),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
