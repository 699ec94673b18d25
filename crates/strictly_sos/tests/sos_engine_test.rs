//! Tests for the SOS game engine lifecycle.

use strictly_sos::{
    Cell, Game, GameConfig, GameMode, MAX_BOARD_SIZE, Move, MoveError, Outcome, Phase, PlayerKind,
    ScoringRule, Symbol, parse_move_log,
};

fn new_game(size: i64, mode: GameMode) -> Game {
    Game::new(size, mode, PlayerKind::Human, PlayerKind::Computer).expect("Valid configuration")
}

/// Place, switch, check: the sequence every caller follows.
fn play(game: &mut Game, row: isize, col: isize) -> bool {
    game.place_symbol(row, col).expect("Legal move");
    game.switch_turn();
    game.is_game_over()
}

#[test]
fn test_fresh_game_for_all_modes() {
    for mode in [GameMode::Simple, GameMode::General] {
        for size in 1..=6 {
            let game = new_game(size, mode);
            assert_eq!(game.board_size(), size as usize);
            assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
            assert_eq!(game.current_symbol(), Symbol::S);
            assert!(game.history().is_empty());
        }
    }
}

#[test]
fn test_zero_board_size_is_invalid_configuration() {
    let err = Game::new(0, GameMode::Simple, PlayerKind::Human, PlayerKind::Human).unwrap_err();
    assert!(err.to_string().starts_with("Invalid configuration"));
}

#[test]
fn test_huge_board_size_is_invalid_configuration() {
    let too_big = i64::try_from(MAX_BOARD_SIZE).unwrap() + 1;
    for size in [too_big, i64::MAX / 2, i64::MAX] {
        let err =
            Game::new(size, GameMode::General, PlayerKind::Human, PlayerKind::Human).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}

#[test]
fn test_negative_coordinates_never_valid() {
    let game = new_game(3, GameMode::Simple);
    assert!(!game.is_valid_move(-1, 0));
    assert!(!game.is_valid_move(0, -1));
    assert!(!game.is_valid_move(3, 0));
    assert!(game.is_valid_move(2, 2));
}

#[test]
fn test_illegal_placement_reports_out_of_bounds() {
    let mut game = new_game(3, GameMode::Simple);
    assert_eq!(
        game.place_symbol(-1, 0),
        Err(MoveError::OutOfBounds { row: -1, col: 0 })
    );
    assert!(game.history().is_empty());
}

#[test]
fn test_row_of_three_without_switching_ends_game() {
    let mut game = new_game(3, GameMode::Simple);
    game.place_symbol(0, 0).unwrap();
    assert!(!game.is_game_over());
    game.place_symbol(0, 1).unwrap();
    assert!(!game.is_game_over());
    game.place_symbol(0, 2).unwrap();
    assert!(game.is_game_over());
    assert_eq!(game.phase(), Phase::Ended);
}

#[test]
fn test_full_board_without_sequence_is_over() {
    // S O S
    // S O O
    // O S S
    let mut game = new_game(3, GameMode::Simple);
    let cells = [
        (0, 0, Symbol::S),
        (0, 1, Symbol::O),
        (0, 2, Symbol::S),
        (1, 0, Symbol::S),
        (1, 1, Symbol::O),
        (1, 2, Symbol::O),
        (2, 0, Symbol::O),
        (2, 1, Symbol::S),
        (2, 2, Symbol::S),
    ];
    for (row, col, symbol) in cells {
        if game.current_symbol() != symbol {
            game.switch_turn();
        }
        game.place_symbol(row, col).unwrap();
        if row < 2 || col < 2 {
            assert!(!game.is_game_over(), "Over early at ({row}, {col})");
        }
    }
    assert!(game.is_game_over());
    assert_eq!(game.determine_winner(), Outcome::Draw);
}

#[test]
fn test_state_machine_round_trip() {
    let mut game = new_game(3, GameMode::Simple);

    // S takes the left column while O wanders.
    assert!(!play(&mut game, 0, 0));
    assert!(!play(&mut game, 0, 1));
    assert!(!play(&mut game, 1, 0));
    assert!(!play(&mut game, 1, 2));
    game.place_symbol(2, 0).unwrap();
    // Checked before switching, the column belongs to the symbol to move.
    assert!(game.is_game_over());
    assert_eq!(game.determine_winner(), Outcome::Winner(Symbol::S));

    game.reset_game();
    assert_eq!(game.phase(), Phase::Active);
    assert!(game.valid_moves().len() == 9);
}

#[test]
fn test_reset_then_replay_reproduces_game() {
    let mut game = new_game(4, GameMode::General);
    let moves = [(0, 0), (3, 3), (1, 2), (2, 1), (0, 3)];
    for &(row, col) in &moves {
        play(&mut game, row, col);
    }
    let first_board = game.board().clone();
    let first_log = game.history().to_vec();

    game.reset_game();
    for &(row, col) in &moves {
        play(&mut game, row, col);
    }

    assert_eq!(*game.board(), first_board);
    assert_eq!(game.history(), first_log.as_slice());
}

#[test]
fn test_replay_from_recorded_log() {
    let log = "S: (0, 0)\nO: (1, 1)\nS: (0, 1)\nO: (2, 2)\nS: (0, 2)\n";
    let moves = parse_move_log(log).unwrap();
    let config =
        GameConfig::new(3, GameMode::Simple, PlayerKind::Human, PlayerKind::Human).unwrap();

    let game = Game::replay(config, &moves).unwrap();
    assert_eq!(game.move_log(), log);
    assert_eq!(game.current_symbol(), Symbol::O);
    assert_eq!(game.determine_winner(), Outcome::Winner(Symbol::S));
}

#[test]
fn test_replay_rejects_conflicting_log() {
    let moves = [Move::new(Symbol::S, 1, 1), Move::new(Symbol::O, 1, 1)];
    let config =
        GameConfig::new(3, GameMode::Simple, PlayerKind::Human, PlayerKind::Human).unwrap();
    assert!(matches!(
        Game::replay(config, &moves),
        Err(MoveError::Occupied { row: 1, col: 1, occupant: Symbol::S })
    ));
}

#[test]
fn test_legacy_scoring_parity() {
    // O completes the top row while O is to move: the row is credited to S.
    let config = GameConfig::new(3, GameMode::Simple, PlayerKind::Human, PlayerKind::Human)
        .unwrap()
        .with_scoring(ScoringRule::Legacy);
    let mut game = Game::from_config(config);
    game.switch_turn();
    for col in 0..3 {
        game.place_symbol(0, col).unwrap();
    }
    assert_eq!(game.current_symbol(), Symbol::O);
    assert!(game.is_game_over());
    assert_eq!(game.determine_winner(), Outcome::Winner(Symbol::S));
}

#[test]
fn test_board_too_small_for_sequence_ends_when_full() {
    let mut game = new_game(2, GameMode::General);
    assert!(!play(&mut game, 0, 0));
    assert!(!play(&mut game, 0, 1));
    assert!(!play(&mut game, 1, 0));
    assert!(play(&mut game, 1, 1));
    assert_eq!(game.determine_winner(), Outcome::Draw);
}

#[test]
fn test_game_serializes_to_json() {
    let mut game = new_game(3, GameMode::Simple);
    game.place_symbol(1, 1).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["current"], "S");
    assert_eq!(json["history"][0]["row"], 1);
    assert_eq!(json["config"]["mode"], "simple");
}
