//! Board tests - occupancy, locking and the row sweep

use blockfall::core::Board;
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

fn fill_row(board: &mut Board, y: i8, value: u8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, value);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(EMPTY_CELL));
            assert!(!board.is_occupied(x, y), "cell ({}, {}) should be free", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, 3));
    assert_eq!(board.get(5, 10), Some(3));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, 3));
    assert!(!board.set(0, BOARD_HEIGHT as i8, 3));
}

#[test]
fn test_occupancy_outside_grid() {
    let board = Board::new();

    // Side walls and the floor block.
    assert!(board.is_occupied(-1, 5));
    assert!(board.is_occupied(BOARD_WIDTH as i8, 5));
    assert!(board.is_occupied(4, BOARD_HEIGHT as i8));

    // Above the top is open, but only inside the columns.
    assert!(!board.is_occupied(4, -1));
    assert!(!board.is_occupied(0, -3));
    assert!(board.is_occupied(-1, -1));
}

#[test]
fn test_lock_skips_cells_outside_grid() {
    let mut board = Board::new();
    board.lock([(4, -1), (4, 0), (5, 0), (12, 0)], 2);

    assert_eq!(board.get(4, 0), Some(2));
    assert_eq!(board.get(5, 0), Some(2));
    assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY_CELL).count(), 2);
}

#[test]
fn test_sweep_nothing_full() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 19, 1);
    }
    let before = board.clone();

    assert_eq!(board.sweep_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_sweep_two_middle_rows_keeps_order() {
    let mut board = Board::new();
    fill_row(&mut board, 5, 1);
    fill_row(&mut board, 6, 2);
    board.set(0, 4, 3);
    board.set(9, 3, 4);
    board.set(2, 7, 5);
    board.set(7, 19, 6);

    assert_eq!(board.sweep_full_rows(), 2);

    // Rows below the cleared pair stay put.
    assert_eq!(board.get(2, 7), Some(5));
    assert_eq!(board.get(7, 19), Some(6));
    // Rows above drop by two, in the same order.
    assert_eq!(board.get(0, 6), Some(3));
    assert_eq!(board.get(9, 5), Some(4));
    assert_eq!(board.get(0, 4), Some(EMPTY_CELL));
    // Fresh rows on top.
    assert!(board.row(0).iter().all(|&c| c == EMPTY_CELL));
    assert!(board.row(1).iter().all(|&c| c == EMPTY_CELL));
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_sweep_four_adjacent_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, 1);
    }
    board.set(3, 15, 7);

    assert_eq!(board.sweep_full_rows(), 4);
    assert_eq!(board.get(3, 19), Some(7));
    assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY_CELL).count(), 1);
}

#[test]
fn test_sweep_separated_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, 1);
    fill_row(&mut board, 17, 1);
    board.set(0, 18, 2);
    board.set(0, 16, 3);

    assert_eq!(board.sweep_full_rows(), 2);
    assert_eq!(board.get(0, 19), Some(2));
    assert_eq!(board.get(0, 18), Some(3));
    assert!(board.row(17).iter().all(|&c| c == EMPTY_CELL));
}

#[test]
fn test_from_rows_round_trips_through_grid_export() {
    let mut rows = [[0u8; 10]; 20];
    rows[19] = [1, 2, 3, 4, 5, 6, 7, 0, 0, 0];
    rows[0][9] = 7;
    let board = Board::from_rows(&rows);

    assert_eq!(board.get(2, 19), Some(3));
    assert_eq!(board.get(9, 0), Some(7));

    let mut out = [[0u8; 10]; 20];
    board.write_u8_grid(&mut out);
    assert_eq!(out, rows);
}
