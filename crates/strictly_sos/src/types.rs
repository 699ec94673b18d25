//! Core domain types for SOS.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// The first symbol (red player, moves first).
    S,
    /// The second symbol (blue player).
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::S => Symbol::O,
            Symbol::O => Symbol::S,
        }
    }

    /// Parses a symbol from its single-letter label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "S" => Some(Symbol::S),
            "O" => Some(Symbol::O),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// Rule variant, fixed for the life of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Runs of three complete a sequence.
    #[default]
    Simple,
    /// Runs of four complete a sequence.
    General,
}

impl GameMode {
    /// Number of cells in a completed sequence.
    pub fn target_len(self) -> usize {
        match self {
            GameMode::Simple => 3,
            GameMode::General => 4,
        }
    }

    /// Maps a mode label onto a mode.
    ///
    /// Only the exact label `"simple"` selects [`GameMode::Simple`]; every
    /// other label selects [`GameMode::General`].
    #[instrument]
    pub fn from_label(label: &str) -> Self {
        if label == "simple" {
            GameMode::Simple
        } else {
            GameMode::General
        }
    }
}

impl From<&str> for GameMode {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

/// Who supplies the moves for a symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves entered by a person.
    Human,
    /// Moves chosen by an automated strategy.
    Computer,
}

impl PlayerKind {
    /// Maps a player type label onto a kind.
    ///
    /// `"human"` (any case) selects [`PlayerKind::Human`]; anything else is a
    /// computer player.
    #[instrument]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("human") {
            PlayerKind::Human
        } else {
            PlayerKind::Computer
        }
    }
}

impl From<&str> for PlayerKind {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

/// Square N×N board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows. Games only build boards from a
    /// validated [`GameConfig`](crate::GameConfig), whose size is capped.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Converts signed coordinates into in-bounds ones.
    pub fn in_bounds(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.size && col < self.size).then_some((row, col))
    }

    /// Gets the cell at the given position.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), &'static str> {
        if row >= self.size || col >= self.size {
            return Err("Position out of bounds");
        }
        self.cells[row * self.size + col] = cell;
        Ok(())
    }

    /// Checks if a cell is empty. Out-of-bounds cells are not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / size, i % size, *cell))
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Formats the board as a human-readable grid with row and column labels.
    pub fn display(&self) -> String {
        let mut result = String::from("  ");
        for col in 0..self.size {
            result.push_str(&format!(" {}", col));
        }
        result.push('\n');
        for row in 0..self.size {
            result.push_str(&format!("{:>2}", row));
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Occupied(symbol) => symbol.to_string(),
                };
                result.push(' ');
                result.push_str(&symbol);
            }
            result.push('\n');
        }
        result
    }
}
