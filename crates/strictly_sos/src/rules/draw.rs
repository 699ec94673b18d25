//! Full-board detection for SOS.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// A full board ends the game whether or not any sequence was completed.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
