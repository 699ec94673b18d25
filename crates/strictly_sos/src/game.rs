//! The SOS game engine.
//!
//! [`Game`] owns the board, the symbol to move and the move history. Callers
//! drive it with the place, switch, check protocol:
//!
//! ```
//! use strictly_sos::{Game, GameMode, PlayerKind};
//!
//! let mut game = Game::new(3, GameMode::Simple, PlayerKind::Human, PlayerKind::Computer)?;
//! if game.is_valid_move(1, 1) {
//!     game.place_symbol(1, 1)?;
//!     game.switch_turn();
//! }
//! assert!(!game.is_game_over());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::action::{Move, MoveError, format_move_log};
use super::config::{ConfigError, GameConfig};
use super::invariants::{InvariantSet, SosInvariants};
use super::phases::{Outcome, Phase};
use super::rules::{self, ScoringRule, Scoreboard};
use super::types::{Board, Cell, GameMode, PlayerKind, Symbol};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// SOS game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) current: Symbol,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board and `S` to move.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `board_size` is not positive.
    #[instrument]
    pub fn new(
        board_size: i64,
        mode: GameMode,
        red: PlayerKind,
        blue: PlayerKind,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig::new(board_size, mode, red, blue)?;
        Ok(Self::from_config(config))
    }

    /// Creates a new game from an already validated configuration.
    #[instrument]
    pub fn from_config(config: GameConfig) -> Self {
        info!(
            board_size = *config.board_size(),
            mode = %config.mode(),
            scoring = %config.scoring(),
            "Creating new game"
        );
        Self {
            board: Board::new(*config.board_size()),
            current: Symbol::S,
            history: Vec::new(),
            config,
        }
    }

    /// Rebuilds a game by applying recorded moves in order.
    ///
    /// Each move is placed with its own symbol, after which the turn passes
    /// to the other symbol.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] hit; moves before it are not kept.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(config: GameConfig, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::from_config(config);
        for mov in moves {
            game.current = mov.symbol;
            game.place_symbol(signed(mov.row), signed(mov.col))?;
            game.switch_turn();
        }
        Ok(game)
    }

    /// Returns the configuration this game was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        *self.config.board_size()
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        *self.config.mode()
    }

    /// Returns the scoring rule.
    pub fn scoring(&self) -> ScoringRule {
        *self.config.scoring()
    }

    /// Returns the symbol to move.
    pub fn current_symbol(&self) -> Symbol {
        self.current
    }

    /// Who supplies moves for a symbol.
    pub fn player_kind(&self, symbol: Symbol) -> PlayerKind {
        self.config.player_kind(symbol)
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Renders the move history in the move-log line format.
    pub fn move_log(&self) -> String {
        format_move_log(&self.history)
    }

    /// Checks that `(row, col)` is on the board and empty.
    pub fn is_valid_move(&self, row: isize, col: isize) -> bool {
        self.board
            .in_bounds(row, col)
            .is_some_and(|(row, col)| self.board.is_empty(row, col))
    }

    /// Lists every empty cell in row-major order.
    pub fn valid_moves(&self) -> Vec<(usize, usize)> {
        self.board
            .iter()
            .filter(|(_, _, cell)| *cell == Cell::Empty)
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Places the symbol to move at `(row, col)` and records the move.
    ///
    /// The turn is not switched and game end is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::Occupied`]; the game
    /// is left untouched.
    #[instrument(skip(self), fields(symbol = %self.current))]
    pub fn place_symbol(&mut self, row: isize, col: isize) -> Result<(), MoveError> {
        let Some((r, c)) = self.board.in_bounds(row, col) else {
            warn!("Rejected move outside the board");
            return Err(MoveError::OutOfBounds { row, col });
        };

        if let Some(Cell::Occupied(occupant)) = self.board.get(r, c) {
            warn!(%occupant, "Rejected move on occupied cell");
            return Err(MoveError::Occupied {
                row: r,
                col: c,
                occupant,
            });
        }

        self.board
            .set(r, c, Cell::Occupied(self.current))
            .map_err(|_| MoveError::OutOfBounds { row, col })?;
        self.history.push(Move::new(self.current, r, c));
        debug!(moves = self.history.len(), "Symbol placed");

        debug_assert!(
            SosInvariants::check_all(self).is_ok(),
            "Game invariants violated after placement"
        );
        Ok(())
    }

    /// Passes the turn to the other symbol.
    #[instrument(skip(self), fields(from = %self.current))]
    pub fn switch_turn(&mut self) {
        self.current = self.current.opponent();
        debug!(to = %self.current, "Turn switched");
    }

    /// Checks whether the game has reached a terminal state.
    ///
    /// The game is over when the symbol to move fills an edge-anchored run
    /// (a row from column 0, a column from row 0, or one of the two corner
    /// diagonals), or when no empty cell remains.
    #[instrument(skip(self), fields(symbol = %self.current))]
    pub fn is_game_over(&self) -> bool {
        let target = self.mode().target_len();
        if rules::has_anchored_sequence(&self.board, self.current, target) {
            debug!("Completed sequence ends the game");
            return true;
        }
        rules::is_full(&self.board)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::Ended
        } else {
            Phase::Active
        }
    }

    /// Scores the board under this game's scoring rule.
    pub fn scores(&self) -> Scoreboard {
        rules::tally(
            &self.board,
            self.current,
            self.mode().target_len(),
            self.scoring(),
        )
    }

    /// Returns the symbol with more completed sequences, or a draw.
    #[instrument(skip(self))]
    pub fn determine_winner(&self) -> Outcome {
        let scores = self.scores();
        let outcome = scores.leader();
        info!(s = scores.s, o = scores.o, %outcome, "Winner determined");
        outcome
    }

    /// Clears the board and history and gives the move back to `S`.
    ///
    /// Board size, mode, player kinds and scoring rule are kept.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.history.clear();
        self.current = Symbol::S;
        info!("Game reset");
    }
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
