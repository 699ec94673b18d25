//! Play configuration: TOML file, defaults and command-line overrides.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_sos::{ConfigError, GameConfig, GameMode, PlayerKind, ScoringRule};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Board and player setup.
    #[serde(default)]
    game: GameSection,

    /// File the move log is written to after every move.
    #[serde(default = "default_record_path")]
    record_path: PathBuf,

    /// Number of rounds to play.
    #[serde(default = "default_rounds")]
    rounds: u32,

    /// Seed for computer players; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

/// The `[game]` table.
///
/// Mode and player types are kept as the labels the user typed and are
/// interpreted when the [`GameConfig`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSection {
    /// Board side length.
    #[serde(default = "default_board_size")]
    board_size: i64,

    /// Mode label.
    #[serde(default = "default_mode")]
    mode: String,

    /// Red player (S) type label.
    #[serde(default = "default_red")]
    red: String,

    /// Blue player (O) type label.
    #[serde(default = "default_blue")]
    blue: String,

    /// Scoring rule.
    #[serde(default)]
    scoring: ScoringRule,
}

fn default_record_path() -> PathBuf {
    PathBuf::from("recorded_game.txt")
}

fn default_rounds() -> u32 {
    1
}

fn default_board_size() -> i64 {
    3
}

fn default_mode() -> String {
    GameMode::Simple.to_string()
}

fn default_red() -> String {
    PlayerKind::Human.to_string()
}

fn default_blue() -> String {
    PlayerKind::Computer.to_string()
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            mode: default_mode(),
            red: default_red(),
            blue: default_blue(),
            scoring: ScoringRule::default(),
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            game: GameSection::default(),
            record_path: default_record_path(),
            rounds: default_rounds(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            board_size = config.game.board_size,
            mode = %config.game.mode,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file given on the command line, if any, then applies the
    /// command-line overrides.
    #[instrument(skip(args))]
    pub fn load(args: &PlayArgs) -> Result<Self, ConfigError> {
        let config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };
        Ok(config.with_overrides(args))
    }

    /// Replaces every setting the command line provides.
    pub fn with_overrides(mut self, args: &PlayArgs) -> Self {
        if let Some(size) = args.size {
            self.game.board_size = size;
        }
        if let Some(mode) = &args.mode {
            self.game.mode = mode.clone();
        }
        if let Some(red) = &args.red {
            self.game.red = red.clone();
        }
        if let Some(blue) = &args.blue {
            self.game.blue = blue.clone();
        }
        if let Some(scoring) = args.scoring {
            self.game.scoring = scoring;
        }
        if let Some(rounds) = args.rounds {
            self.rounds = rounds;
        }
        if let Some(record) = &args.record {
            self.record_path = record.clone();
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        self
    }

    /// Validates the game settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the board size is not positive.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig::new(
            self.game.board_size,
            GameMode::from_label(&self.game.mode),
            PlayerKind::from_label(&self.game.red),
            PlayerKind::from_label(&self.game.blue),
        )?;
        Ok(config.with_scoring(self.game.scoring))
    }
}
