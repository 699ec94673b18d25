//! Game rules for SOS.
//!
//! This module contains pure functions for evaluating a board according to
//! SOS rules. Rules are separated from board storage so the engine, the
//! invariants and external strategies can share them.

pub mod draw;
pub mod score;
pub mod sequence;

pub use draw::is_full;
pub use score::{ScoringRule, Scoreboard, tally};
pub use sequence::{Direction, has_anchored_sequence, is_complete, sequence_owner};
