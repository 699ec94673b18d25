//! Strictly SOS play - terminal front end for the SOS engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides, validated into a
//!   [`strictly_sos::GameConfig`]
//! - **Players**: human, random and first-empty move sources
//! - **Recorder**: writes the move log after every accepted move
//! - **Orchestrator**: runs rounds with place, record, switch, check

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod orchestrator;
pub mod players;
mod recorder;
mod replay;

pub use config::{GameSection, PlayConfig};
pub use orchestrator::{Orchestrator, RoundSummary, announcement};
pub use players::{
    FirstEmptyPlayer, HumanPlayer, LineSource, Player, RandomPlayer, StdinLines,
};
pub use recorder::{FileRecorder, MoveSink, NullSink};
pub use replay::{ReplayReport, replay_file, replay_log};
