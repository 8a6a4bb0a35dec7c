//! Piece tests - canonical shapes, bounding queries and right rotation

use std::collections::BTreeSet;

use proptest::prelude::*;
use term_tetris::core::pieces::{get_shape, Piece};
use term_tetris::types::PieceKind;

fn offset_set(piece: &Piece) -> BTreeSet<(i8, i8)> {
    piece.offsets().iter().copied().collect()
}

#[test]
fn test_canonical_shapes_by_id() {
    let expected: [[(i8, i8); 4]; 8] = [
        [(0, 0), (0, 0), (0, 0), (0, 0)],
        [(1, 0), (1, 1), (0, 1), (0, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
        [(0, 0), (0, 1), (0, 2), (0, 3)],
        [(0, 0), (1, 0), (2, 0), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(1, 0), (0, 0), (0, 1), (0, 2)],
    ];

    for (id, offsets) in expected.iter().enumerate() {
        let piece = Piece::from_id(id as u8).unwrap();
        assert_eq!(piece.offsets(), offsets, "shape-type {}", id);
        assert_eq!(piece.shape_id(), id as u8);
    }
    assert!(Piece::from_id(8).is_none());
}

#[test]
fn test_sentinel_piece() {
    let piece = Piece::empty();
    assert!(piece.is_empty());
    assert_eq!(piece.kind(), None);
    assert_eq!(piece.shape_id(), 0);
    assert_eq!((piece.min_x(), piece.max_x(), piece.min_y(), piece.max_y()), (0, 0, 0, 0));
}

#[test]
fn test_bounding_queries() {
    let z = Piece::new(PieceKind::Z);
    assert_eq!(z.min_x(), 0);
    assert_eq!(z.max_x(), 1);
    assert_eq!(z.min_y(), 0);
    assert_eq!(z.max_y(), 2);

    let horizontal_i = Piece::new(PieceKind::I).rotate_right();
    assert_eq!(horizontal_i.max_x(), 3);
    assert_eq!(horizontal_i.max_y(), 0);
}

#[test]
fn test_rotation_preserves_kind() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind);
        for _ in 0..4 {
            piece = piece.rotate_right();
            assert_eq!(piece.kind(), Some(kind));
        }
    }
}

#[test]
fn test_four_rotations_return_canonical_offsets() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        let back = piece
            .rotate_right()
            .rotate_right()
            .rotate_right()
            .rotate_right();
        assert_eq!(back.offsets(), &get_shape(kind), "{:?}", kind);
    }
}

#[test]
fn test_o_rotation_keeps_footprint() {
    let o = Piece::new(PieceKind::O);
    assert_eq!(offset_set(&o.rotate_right()), offset_set(&o));
}

#[test]
fn test_s_rotation() {
    // X. / XX / .X  ->  .XX / XX.
    let rotated = Piece::new(PieceKind::S).rotate_right();
    assert_eq!(
        offset_set(&rotated),
        BTreeSet::from([(0, 1), (1, 1), (1, 0), (2, 0)])
    );
}

fn any_kind() -> impl Strategy<Value = PieceKind> {
    (1u8..=7).prop_map(|id| PieceKind::from_id(id).unwrap())
}

proptest! {
    #[test]
    fn rotation_is_normalized(kind in any_kind(), turns in 1usize..12) {
        let mut piece = Piece::new(kind);
        for _ in 0..turns {
            piece = piece.rotate_right();
            prop_assert_eq!(piece.min_x(), 0);
            prop_assert_eq!(piece.min_y(), 0);
        }
    }

    #[test]
    fn rotation_has_period_four(kind in any_kind(), turns in 0usize..8) {
        let mut piece = Piece::new(kind);
        for _ in 0..turns {
            piece = piece.rotate_right();
        }
        let mut again = piece;
        for _ in 0..4 {
            again = again.rotate_right();
        }
        prop_assert_eq!(again, piece);
    }

    #[test]
    fn rotation_keeps_four_distinct_cells(kind in any_kind(), turns in 0usize..4) {
        let mut piece = Piece::new(kind);
        for _ in 0..turns {
            piece = piece.rotate_right();
        }
        prop_assert_eq!(offset_set(&piece).len(), 4);
    }
}
