//! Session tests - commands, locking, scoring and game over

use blockfall::core::{Board, GameConfig, GameState};
use blockfall::types::{GameAction, GameStatus, ShapeId, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

/// First seed whose opening piece is the straight bar.
fn bar_seed() -> u32 {
    (1..10_000)
        .find(|&seed| GameState::new(seed).active().unwrap().shape_id.index() == 0)
        .expect("some seed opens with the bar")
}

/// Bottom `rows` rows filled except for column 3.
fn board_with_gap(rows: i8) -> Board {
    let mut board = Board::new();
    for y in BOARD_HEIGHT as i8 - rows..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if x != 3 {
                board.set(x, y, 7);
            }
        }
    }
    board
}

/// Stand the bar up in column 3 and let it fall into the gap.
fn drop_bar_into_gap(rows: i8) -> GameState {
    let mut game = GameState::from_board(board_with_gap(rows), bar_seed());
    assert!(game.rotate());
    assert_eq!(game.active().unwrap().x, 3);
    while game.move_down() {}
    game
}

#[test]
fn test_new_game() {
    let game = GameState::new(12345);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.seed(), 12345);
    assert_eq!(game.pieces_spawned(), 1);
    assert!(game.active().is_some());
    assert_eq!(*game.board(), Board::new());
}

#[test]
fn test_with_config_uses_seed() {
    let config = GameConfig {
        seed: 77,
        drop_interval_ms: 500,
    };
    let a = GameState::with_config(config);
    let b = GameState::new(77);
    assert_eq!(a.active(), b.active());
    assert_eq!(a.seed(), 77);
}

#[test]
fn test_score_single_line() {
    let game = drop_bar_into_gap(1);
    assert_eq!(game.score(), 10);
}

#[test]
fn test_score_two_lines() {
    let game = drop_bar_into_gap(2);
    assert_eq!(game.score(), 20);
}

#[test]
fn test_score_three_lines() {
    let game = drop_bar_into_gap(3);
    assert_eq!(game.score(), 40);
}

#[test]
fn test_score_four_lines() {
    let mut game = drop_bar_into_gap(4);
    assert_eq!(game.score(), 80);

    let ev = game.take_last_event().unwrap();
    assert_eq!(ev.shape_id, ShapeId::new(0).unwrap());
    assert_eq!(ev.rows_cleared, 4);
    assert_eq!(ev.score_delta, 80);

    // Nothing left on the board and the next piece is falling.
    assert!(game.board().cells().iter().all(|&c| c == EMPTY_CELL));
    assert_eq!(game.pieces_spawned(), 2);
    assert_eq!(game.status(), GameStatus::Running);
}

#[test]
fn test_partial_clear_drops_remainder() {
    let game = drop_bar_into_gap(2);
    // The two bar cells above the cleared rows now sit on the floor.
    assert_eq!(game.board().get(3, 19), Some(1));
    assert_eq!(game.board().get(3, 18), Some(1));
    assert_eq!(game.board().get(3, 17), Some(EMPTY_CELL));
    assert_eq!(game.board().get(0, 19), Some(EMPTY_CELL));
}

#[test]
fn test_blocked_spawn_ends_game_without_touching_board() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 0, 2);
        board.set(x, 1, 2);
    }

    let game = GameState::from_board(board.clone(), 9);
    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(game.game_over());
    assert_eq!(*game.board(), board);
    assert_eq!(game.pieces_spawned(), 0);
    assert_eq!(game.score(), 0);
    // The piece that did not fit is still reported for drawing.
    let active = game.active().unwrap();
    assert_eq!(active.y, 0);
}

#[test]
fn test_move_left_at_wall_is_noop() {
    let mut game = GameState::new(4);
    while game.move_left() {}
    let at_wall = game.active().unwrap();
    assert_eq!(at_wall.x, 0);

    assert!(!game.move_left());
    assert_eq!(game.active().unwrap(), at_wall);
}

#[test]
fn test_move_right_at_wall_is_noop() {
    let mut game = GameState::new(4);
    while game.move_right() {}
    let at_wall = game.active().unwrap();
    assert_eq!(at_wall.x + at_wall.grid.cols() as i8, BOARD_WIDTH as i8);

    assert!(!game.move_right());
    assert_eq!(game.active().unwrap(), at_wall);
}

#[test]
fn test_move_blocked_by_locked_cell() {
    let mut board = Board::new();
    // A column of blocks right of every spawn position.
    for y in 0..4 {
        board.set(8, y, 5);
    }
    let mut game = GameState::from_board(board, 11);
    while game.move_right() {}
    let piece = game.active().unwrap();
    assert_eq!(piece.x + piece.grid.cols() as i8, 8);
}

#[test]
fn test_soft_drop_reports_fall_then_lock() {
    let mut game = GameState::new(21);
    assert!(game.apply_action(GameAction::SoftDrop));
    assert_eq!(game.active().unwrap().y, 1);

    while game.apply_action(GameAction::SoftDrop) {}
    assert_eq!(game.pieces_spawned(), 2);
    assert_eq!(game.active().unwrap().y, 0);
    assert!(game.board().cells().iter().any(|&c| c != EMPTY_CELL));
}

#[test]
fn test_tick_matches_move_down() {
    let mut a = GameState::new(8);
    let mut b = GameState::new(8);
    for _ in 0..300 {
        assert_eq!(a.tick(), b.move_down());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_stacking_in_the_middle_ends_the_game() {
    let mut game = GameState::new(5);
    let mut ticks = 0;
    while !game.game_over() {
        game.tick();
        ticks += 1;
        assert!(ticks < 10_000, "game never ended");
    }

    let board = game.board().clone();
    let active = game.active();
    let score = game.score();

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ] {
        assert!(!game.apply_action(action));
    }
    assert!(!game.tick());
    assert!(!game.spawn_piece());

    assert_eq!(*game.board(), board);
    assert_eq!(game.active(), active);
    assert_eq!(game.score(), score);
    assert_eq!(game.status(), GameStatus::GameOver);
}

#[test]
fn test_snapshot_mirrors_state() {
    let mut game = GameState::new(31);
    game.move_down();
    let snap = game.snapshot();

    let active = game.active().unwrap();
    let snap_active = snap.active.unwrap();
    assert_eq!((snap_active.x, snap_active.y), (active.x, active.y));
    assert_eq!(snap_active.grid, active.grid);
    assert_eq!(snap.score, game.score());
    assert_eq!(snap.status, GameStatus::Running);
    assert_eq!(snap.seed, 31);
    assert_eq!(snap.pieces_spawned, 1);
    assert!(snap.board.iter().flatten().all(|&c| c == EMPTY_CELL));
}
