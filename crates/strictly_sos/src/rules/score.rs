//! Sequence scoring for SOS.

use super::super::{Board, Outcome, Symbol};
use super::sequence::{Direction, is_complete, sequence_owner};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// How completed sequences turn into points.
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
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScoringRule {
    /// Every completed run scores one point for the symbol that fills it.
    ///
    /// Runs are counted horizontally, vertically, down-right and also
    /// down-left. [`ScoringRule::Legacy`] never scores the down-left
    /// (anti-diagonal) direction.
    #[default]
    Occupant,
    /// Direction-keyed scoring against the symbol to move.
    ///
    /// Each cell is tested as a run start horizontally, then vertically, then
    /// diagonally, stopping at the first match; every run must be filled
    /// with the symbol to move. A horizontal match scores for `S`, a
    /// vertical match for `O` and a diagonal match for both.
    Legacy,
}

/// Completed-sequence counts per symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Points for `S`.
    pub s: u32,
    /// Points for `O`.
    pub o: u32,
}

impl Scoreboard {
    /// Adds one point for a symbol.
    pub fn credit(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::S => self.s += 1,
            Symbol::O => self.o += 1,
        }
    }

    /// Points held by a symbol.
    pub fn get(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::S => self.s,
            Symbol::O => self.o,
        }
    }

    /// The symbol with strictly more points, or a draw.
    pub fn leader(&self) -> Outcome {
        match self.s.cmp(&self.o) {
            std::cmp::Ordering::Greater => Outcome::Winner(Symbol::S),
            std::cmp::Ordering::Less => Outcome::Winner(Symbol::O),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Scores every completed sequence on the board.
///
/// `to_move` only matters for [`ScoringRule::Legacy`].
#[instrument(skip(board), fields(size = board.size()))]
pub fn tally(board: &Board, to_move: Symbol, target: usize, rule: ScoringRule) -> Scoreboard {
    let mut score = Scoreboard::default();
    let size = board.size();

    for row in 0..size {
        for col in 0..size {
            match rule {
                ScoringRule::Occupant => {
                    for direction in Direction::iter() {
                        if let Some(owner) = sequence_owner(board, row, col, direction, target) {
                            score.credit(owner);
                        }
                    }
                }
                ScoringRule::Legacy => {
                    let complete =
                        |direction| is_complete(board, row, col, direction, to_move, target);
                    if complete(Direction::Horizontal) {
                        score.credit(Symbol::S);
                    } else if complete(Direction::Vertical) {
                        score.credit(Symbol::O);
                    } else if complete(Direction::Diagonal) {
                        score.credit(Symbol::S);
                        score.credit(Symbol::O);
                    }
                }
            }
        }
    }

    debug!(s = score.s, o = score.o, %rule, "Board scored");
    score
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;

    fn board_with(size: usize, cells: &[(usize, usize, Symbol)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, symbol) in cells {
            board.set(row, col, Cell::Occupied(symbol)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_is_draw() {
        let board = Board::new(3);
        for rule in [ScoringRule::Occupant, ScoringRule::Legacy] {
            let score = tally(&board, Symbol::S, 3, rule);
            assert_eq!(score, Scoreboard::default());
            assert_eq!(score.leader(), Outcome::Draw);
        }
    }

    #[test]
    fn test_occupant_credits_filling_symbol() {
        // O fills a column; O scores no matter who is to move.
        let board = board_with(3, &[(0, 1, Symbol::O), (1, 1, Symbol::O), (2, 1, Symbol::O)]);
        let score = tally(&board, Symbol::S, 3, ScoringRule::Occupant);
        assert_eq!(score, Scoreboard { s: 0, o: 1 });
        assert_eq!(score.leader(), Outcome::Winner(Symbol::O));
    }

    #[test]
    fn test_occupant_counts_overlapping_runs() {
        let board = board_with(
            4,
            &[(0, 0, Symbol::S), (0, 1, Symbol::S), (0, 2, Symbol::S), (0, 3, Symbol::S)],
        );
        let score = tally(&board, Symbol::O, 3, ScoringRule::Occupant);
        assert_eq!(score.get(Symbol::S), 2);
    }

    #[test]
    fn test_legacy_scores_by_direction() {
        // O fills a column while O is to move: the vertical rule credits O.
        let board = board_with(3, &[(0, 1, Symbol::O), (1, 1, Symbol::O), (2, 1, Symbol::O)]);
        let score = tally(&board, Symbol::O, 3, ScoringRule::Legacy);
        assert_eq!(score, Scoreboard { s: 0, o: 1 });

        // The same column is invisible when S is to move.
        let score = tally(&board, Symbol::S, 3, ScoringRule::Legacy);
        assert_eq!(score, Scoreboard::default());
    }

    #[test]
    fn test_legacy_row_credits_s_even_when_o_fills_it() {
        let board = board_with(3, &[(2, 0, Symbol::O), (2, 1, Symbol::O), (2, 2, Symbol::O)]);
        let score = tally(&board, Symbol::O, 3, ScoringRule::Legacy);
        assert_eq!(score, Scoreboard { s: 1, o: 0 });
        assert_eq!(score.leader(), Outcome::Winner(Symbol::S));
    }

    #[test]
    fn test_legacy_diagonal_credits_both() {
        let board = board_with(3, &[(0, 0, Symbol::S), (1, 1, Symbol::S), (2, 2, Symbol::S)]);
        let score = tally(&board, Symbol::S, 3, ScoringRule::Legacy);
        assert_eq!(score, Scoreboard { s: 1, o: 1 });
        assert_eq!(score.leader(), Outcome::Draw);
    }

    #[test]
    fn test_legacy_first_match_per_cell() {
        // (0,0) starts both a row and a column of S; only the row counts.
        let board = board_with(
            3,
            &[
                (0, 0, Symbol::S),
                (0, 1, Symbol::S),
                (0, 2, Symbol::S),
                (1, 0, Symbol::S),
                (2, 0, Symbol::S),
            ],
        );
        let score = tally(&board, Symbol::S, 3, ScoringRule::Legacy);
        assert_eq!(score, Scoreboard { s: 1, o: 0 });
    }

    #[test]
    fn test_rule_parses_from_label() {
        assert_eq!("legacy".parse::<ScoringRule>().unwrap(), ScoringRule::Legacy);
        assert_eq!("occupant".parse::<ScoringRule>().unwrap(), ScoringRule::Occupant);
        assert!("other".parse::<ScoringRule>().is_err());
        assert_eq!(ScoringRule::Legacy.to_string(), "legacy");
    }
}
