//! Player trait and implementations.
//!
//! Players only propose coordinates; the engine stays the sole judge of
//! legality.

mod first_empty;
mod human;
mod random;

pub use first_empty::FirstEmptyPlayer;
pub use human::{HumanPlayer, LineSource, StdinLines};
pub use random::RandomPlayer;

use anyhow::Result;
use strictly_sos::{Game, GameConfig, PlayerKind, Symbol};
use tracing::instrument;

/// Source of moves for one symbol.
pub trait Player {
    /// Gets a move from this player as `(row, col)`.
    fn choose_move(&mut self, game: &Game) -> Result<(isize, isize)>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a person is entering moves.
    ///
    /// Illegal moves from interactive players are re-prompted; from
    /// automated players they are an error.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// Display name for the player of a symbol.
pub fn color_name(symbol: Symbol) -> &'static str {
    match symbol {
        Symbol::S => "Red",
        Symbol::O => "Blue",
    }
}

/// Builds the player the configuration asks for.
///
/// Humans read from stdin and prompt on stdout; computers pick random legal
/// cells, seeded per symbol when a seed is given.
#[instrument]
pub fn for_kind(kind: PlayerKind, symbol: Symbol, seed: Option<u64>) -> Box<dyn Player> {
    let name = format!("{} ({})", color_name(symbol), symbol);
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(name, StdinLines, std::io::stdout())),
        PlayerKind::Computer => {
            let seed = seed.map(|s| match symbol {
                Symbol::S => s,
                Symbol::O => s.wrapping_add(1),
            });
            Box::new(RandomPlayer::new(name, seed))
        }
    }
}

/// Builds the `(red, blue)` players a game configuration asks for.
pub fn for_config(config: &GameConfig, seed: Option<u64>) -> (Box<dyn Player>, Box<dyn Player>) {
    (
        for_kind(config.player_kind(Symbol::S), Symbol::S, seed),
        for_kind(config.player_kind(Symbol::O), Symbol::O, seed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_sos::GameMode;

    fn config(red: PlayerKind, blue: PlayerKind) -> GameConfig {
        GameConfig::new(9, GameMode::Simple, red, blue).unwrap()
    }

    #[test]
    fn test_two_humans_share_stdin() {
        let (red, blue) = for_config(&config(PlayerKind::Human, PlayerKind::Human), None);
        assert!(red.is_interactive());
        assert!(blue.is_interactive());
        assert_eq!(red.name(), "Red (S)");
        assert_eq!(blue.name(), "Blue (O)");
    }

    #[test]
    fn test_human_against_computer() {
        let (red, blue) = for_config(&config(PlayerKind::Human, PlayerKind::Computer), Some(1));
        assert!(red.is_interactive());
        assert!(!blue.is_interactive());

        let (red, blue) = for_config(&config(PlayerKind::Computer, PlayerKind::Human), Some(1));
        assert!(!red.is_interactive());
        assert!(blue.is_interactive());
    }

    #[test]
    fn test_computers_seeded_per_symbol() {
        let game = Game::from_config(config(PlayerKind::Computer, PlayerKind::Computer));
        let (mut red, mut blue) = for_config(game.config(), Some(41));
        let mut expected_red = RandomPlayer::new("red", Some(41));
        let mut expected_blue = RandomPlayer::new("blue", Some(42));

        for _ in 0..10 {
            assert_eq!(
                red.choose_move(&game).unwrap(),
                expected_red.choose_move(&game).unwrap()
            );
            assert_eq!(
                blue.choose_move(&game).unwrap(),
                expected_blue.choose_move(&game).unwrap()
            );
        }
    }

    #[test]
    fn test_seed_wraps_for_blue() {
        let game = Game::from_config(config(PlayerKind::Computer, PlayerKind::Computer));
        let mut blue = for_kind(PlayerKind::Computer, Symbol::O, Some(u64::MAX));
        let mut expected = RandomPlayer::new("blue", Some(0));
        assert_eq!(
            blue.choose_move(&game).unwrap(),
            expected.choose_move(&game).unwrap()
        );
    }
}
