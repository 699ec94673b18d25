//! Sequence detection for SOS.
//!
//! A sequence is a run of `target` identical symbols starting at a cell and
//! stepping in one [`Direction`]. The scan primitive [`is_complete`] is shared
//! by game-over detection and scoring; only the anchor cells differ.

use super::super::{Board, Cell, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Direction a sequence runs in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    AntiDiagonal,
}

impl Direction {
    /// `(row_step, col_step)` for one cell in this direction.
    pub fn steps(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Cells of the run starting at `(row, col)`, or `None` if it leaves the board.
fn run_cells(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    target: usize,
) -> Option<Vec<Cell>> {
    let (row_step, col_step) = direction.steps();
    (0..target)
        .map(|i| {
            let i = isize::try_from(i).ok()?;
            let r = isize::try_from(row).ok()? + i * row_step;
            let c = isize::try_from(col).ok()? + i * col_step;
            let (r, c) = board.in_bounds(r, c)?;
            board.get(r, c)
        })
        .collect()
}

/// Checks whether `target` cells starting at `(row, col)` in `direction` all
/// hold `symbol` and lie within the board.
pub fn is_complete(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    symbol: Symbol,
    target: usize,
) -> bool {
    run_cells(board, row, col, direction, target)
        .is_some_and(|cells| cells.iter().all(|c| *c == Cell::Occupied(symbol)))
}

/// Returns the symbol filling the run starting at `(row, col)`, if the run is
/// complete.
pub fn sequence_owner(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    target: usize,
) -> Option<Symbol> {
    let cells = run_cells(board, row, col, direction, target)?;
    let owner = cells.first()?.symbol()?;
    cells
        .iter()
        .all(|c| *c == Cell::Occupied(owner))
        .then_some(owner)
}

/// Checks for a completed run of `symbol` anchored at a board edge.
///
/// Rows are scanned from column 0, columns from row 0, the main diagonal from
/// the top-left corner and the anti-diagonal from the top-right corner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_anchored_sequence(board: &Board, symbol: Symbol, target: usize) -> bool {
    let size = board.size();
    if size == 0 {
        return false;
    }

    for row in 0..size {
        if is_complete(board, row, 0, Direction::Horizontal, symbol, target) {
            trace!(row, "Row sequence found");
            return true;
        }
    }

    for col in 0..size {
        if is_complete(board, 0, col, Direction::Vertical, symbol, target) {
            trace!(col, "Column sequence found");
            return true;
        }
    }

    is_complete(board, 0, 0, Direction::Diagonal, symbol, target)
        || is_complete(board, 0, size - 1, Direction::AntiDiagonal, symbol, target)
}
