//! Strictly SOS - pure game logic for SOS.
//!
//! Two players take turns writing their symbol on an N×N board. A run of
//! three (simple mode) or four (general mode) identical symbols along a row,
//! column or diagonal is a completed sequence; when the board fills or the
//! symbol to move holds an edge-anchored sequence, the symbol with more
//! sequences wins.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Symbol`], [`GameMode`], [`PlayerKind`]
//! - **Rules**: pure sequence, full-board and scoring functions in [`rules`]
//! - **Engine**: [`Game`], driven by place, switch, check
//! - **Invariants**: properties asserted after every placement in [`invariants`]
//! - **Moves**: [`Move`] records and the move-log line format

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
mod phases;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, MoveParseError, format_move_log, parse_move_log};
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE};
pub use game::Game;
pub use phases::{Outcome, Phase};
pub use rules::{Direction, ScoringRule, Scoreboard};
pub use types::{Board, Cell, GameMode, PlayerKind, Symbol};
