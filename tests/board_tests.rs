//! Board tests - grid storage, row checks and the line-clear shift

use term_tetris::core::{Board, Piece};
use term_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.occupied_count(), 0);
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

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
    assert!(!board.is_occupied(5, 10));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_row_full_detection() {
    let mut board = Board::new();

    for x in 0..(BOARD_WIDTH as i8 - 1) {
        board.set(x, 19, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(19));

    board.set(BOARD_WIDTH as i8 - 1, 19, Some(PieceKind::O));
    assert!(board.is_row_full(19));

    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_shift_down_into_bottom_row() {
    let mut board = Board::new();
    board.fill_row(19, Some(PieceKind::I));
    board.set(3, 18, Some(PieceKind::T));
    board.set(4, 10, Some(PieceKind::S));
    board.set(0, 1, Some(PieceKind::Z));
    board.set(9, 0, Some(PieceKind::J));

    board.shift_down_into(19);

    assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 19), Some(None));
    assert_eq!(board.get(4, 11), Some(Some(PieceKind::S)));
    assert_eq!(board.get(4, 10), Some(None));
    // Row 1 is copied into row 2 but also stays where it was; row 0 is untouched.
    assert_eq!(board.get(0, 2), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(0, 1), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(9, 0), Some(Some(PieceKind::J)));
    assert_eq!(board.get(9, 1), Some(None));
}

#[test]
fn test_shift_into_top_rows_is_noop() {
    let mut board = Board::new();
    board.fill_row(1, Some(PieceKind::L));
    let before = board.clone();

    board.shift_down_into(1);
    board.shift_down_into(0);
    assert_eq!(board, before);
}

#[test]
fn test_paint_piece() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::S);

    board.paint(&piece, 2, 3);
    assert_eq!(board.get(2, 3), Some(Some(PieceKind::S)));
    assert_eq!(board.get(2, 4), Some(Some(PieceKind::S)));
    assert_eq!(board.get(3, 4), Some(Some(PieceKind::S)));
    assert_eq!(board.get(3, 5), Some(Some(PieceKind::S)));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    board.fill_row(5, Some(PieceKind::O));
    board.clear();
    assert_eq!(board, Board::default());
}
