//! Validated game configuration.

use super::{GameMode, PlayerKind, ScoringRule, Symbol};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument};

/// Largest accepted board side length.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Everything fixed at game construction.
///
/// A `GameConfig` can only be built through [`GameConfig::new`], which
/// rejects board sizes outside `1..=MAX_BOARD_SIZE`, so any value of this
/// type describes a playable game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct GameConfig {
    /// Side length of the board.
    board_size: usize,
    /// Sequence length rule.
    mode: GameMode,
    /// Who moves for `S`.
    red: PlayerKind,
    /// Who moves for `O`.
    blue: PlayerKind,
    /// How completed sequences are scored.
    scoring: ScoringRule,
}

impl GameConfig {
    /// Validates and builds a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `board_size` is not positive or exceeds
    /// [`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(
        board_size: i64,
        mode: GameMode,
        red: PlayerKind,
        blue: PlayerKind,
    ) -> Result<Self, ConfigError> {
        if board_size <= 0 {
            return Err(ConfigError::new(format!(
                "Board size must be positive, got {}",
                board_size
            )));
        }
        let board_size = usize::try_from(board_size)
            .ok()
            .filter(|size| *size <= MAX_BOARD_SIZE)
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "Board size {} is too large, the maximum is {}",
                    board_size, MAX_BOARD_SIZE
                ))
            })?;

        debug!(board_size, %mode, %red, %blue, "Game configuration validated");
        Ok(Self {
            board_size,
            mode,
            red,
            blue,
            scoring: ScoringRule::default(),
        })
    }

    /// Replaces the scoring rule.
    pub fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Player kind assigned to a symbol.
    pub fn player_kind(&self, symbol: Symbol) -> PlayerKind {
        match symbol {
            Symbol::S => self.red,
            Symbol::O => self.blue,
        }
    }
}

/// Configuration rejected before a game could be created.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid configuration: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
