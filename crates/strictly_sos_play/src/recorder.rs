//! Move-log sinks.
//!
//! A sink receives the game after every accepted move. Sink failures are
//! logged and swallowed: recording never changes or interrupts play.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use strictly_sos::Game;
use tracing::{debug, instrument, warn};

/// Receives the game after every accepted move.
pub trait MoveSink {
    /// Records the game's move history.
    fn record(&mut self, game: &Game);
}

/// Rewrites a file with the full move log after every move.
#[derive(Debug, Clone, derive_new::new)]
pub struct FileRecorder {
    #[new(into)]
    path: PathBuf,
}

impl FileRecorder {
    /// Path the log is written to.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Writes the move log, one `"<symbol>: (<row>, <col>)"` line per move.
    #[instrument(skip(self, game), fields(path = %self.path.display(), moves = game.history().len()))]
    pub fn write(&self, game: &Game) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        writer.write_all(game.move_log().as_bytes())?;
        writer.flush()
    }
}

impl MoveSink for FileRecorder {
    fn record(&mut self, game: &Game) {
        match self.write(game) {
            Ok(()) => debug!(path = %self.path.display(), "Recorded game saved"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "Error saving recorded game"),
        }
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MoveSink for NullSink {
    fn record(&mut self, _game: &Game) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_sos::{GameMode, PlayerKind};

    fn game_with_moves() -> Game {
        let mut game =
            Game::new(3, GameMode::Simple, PlayerKind::Human, PlayerKind::Computer).unwrap();
        game.place_symbol(0, 0).unwrap();
        game.switch_turn();
        game.place_symbol(1, 2).unwrap();
        game
    }

    #[test]
    fn test_writes_log_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recorded_game.txt");
        let mut recorder = FileRecorder::new(&path);

        recorder.record(&game_with_moves());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "S: (0, 0)\nO: (1, 2)\n"
        );
    }

    #[test]
    fn test_rewrites_instead_of_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut recorder = FileRecorder::new(&path);
        let mut game = game_with_moves();

        recorder.record(&game);
        game.reset_game();
        game.place_symbol(2, 2).unwrap();
        recorder.record(&game);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "S: (2, 2)\n");
    }

    #[test]
    fn test_failure_leaves_game_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a file.
        let mut recorder = FileRecorder::new(dir.path());
        let game = game_with_moves();
        let before = game.clone();

        assert!(recorder.write(&game).is_err());
        recorder.record(&game);
        assert_eq!(game, before);
    }
}
