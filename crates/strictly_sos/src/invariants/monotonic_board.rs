//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Cell, Game};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must never hit an occupied
/// cell and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new(game.board().size());

        for mov in game.history() {
            if !reconstructed.is_empty(mov.row, mov.col) {
                return false;
            }
            if reconstructed
                .set(mov.row, mov.col, Cell::Occupied(mov.symbol))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
