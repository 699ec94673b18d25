//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::{Cell, Game};

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
