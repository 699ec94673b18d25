//! First-class move records for SOS.
//!
//! Every accepted placement becomes a [`Move`]. The textual form
//! `"<symbol>: (<row>, <col>)"` is the move-log line format consumed by
//! recorders, and it parses back for replay.

use super::Symbol;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A placement: a symbol written at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The symbol placed.
    pub symbol: Symbol,
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(symbol: Symbol, row: usize, col: usize) -> Self {
        Self { symbol, row, col }
    }

    /// Returns the symbol of this move.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the `(row, col)` of this move.
    pub fn cell(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ({}, {})", self.symbol, self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (symbol, coords) = line
            .split_once(':')
            .ok_or_else(|| MoveParseError::new(line, "missing ':' separator"))?;
        let symbol = Symbol::from_label(symbol)
            .ok_or_else(|| MoveParseError::new(line, "unknown symbol"))?;

        let coords = coords
            .trim()
            .strip_prefix('(')
            .and_then(|c| c.strip_suffix(')'))
            .ok_or_else(|| MoveParseError::new(line, "coordinates must be parenthesized"))?;
        let (row, col) = coords
            .split_once(',')
            .ok_or_else(|| MoveParseError::new(line, "expected '(row, col)'"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| MoveParseError::new(line, "row is not a non-negative integer"))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| MoveParseError::new(line, "column is not a non-negative integer"))?;

        Ok(Move { symbol, row, col })
    }
}

/// Renders moves in the move-log format, one newline-terminated line each.
pub fn format_move_log(moves: &[Move]) -> String {
    moves.iter().map(|mov| format!("{}\n", mov)).collect()
}

/// Parses a move log, skipping blank lines.
#[instrument(skip(log))]
pub fn parse_move_log(log: &str) -> Result<Vec<Move>, MoveParseError> {
    log.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.parse::<Move>())
        .collect()
}

/// A placement the engine refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinates lie outside the board.
    #[display("Cell ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
    },

    /// The cell already holds a symbol.
    #[display("Cell ({}, {}) is already occupied by {}", row, col, occupant)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Symbol already in the cell.
        occupant: Symbol,
    },
}

impl std::error::Error for MoveError {}

/// A move-log line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move line {:?}: {}", line, reason)]
pub struct MoveParseError {
    /// The offending line.
    pub line: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl MoveParseError {
    fn new(line: &str, reason: &'static str) -> Self {
        Self {
            line: line.to_string(),
            reason,
        }
    }
}
