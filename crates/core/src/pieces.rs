//! Pieces module - tetromino shapes and right rotation
//!
//! A piece is four cell offsets relative to an anchor. Rotated orientations
//! are not tabulated: `rotate_right` derives them from the current offsets and
//! re-normalizes so the smallest x and y offsets are always 0.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Offsets of the empty sentinel piece
const EMPTY_SHAPE: PieceShape = [(0, 0); 4];

/// Spawn orientation for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::Z => [(1, 0), (1, 1), (0, 1), (0, 2)],
        PieceKind::S => [(0, 0), (0, 1), (1, 1), (1, 2)],
        PieceKind::I => [(0, 0), (0, 1), (0, 2), (0, 3)],
        PieceKind::T => [(0, 0), (1, 0), (2, 0), (1, 1)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::L => [(0, 0), (1, 0), (1, 1), (1, 2)],
        PieceKind::J => [(1, 0), (0, 0), (0, 1), (0, 2)],
    }
}

/// A piece value: shape-type plus its current offsets.
///
/// `kind == None` is the empty sentinel (shape-type 0) installed when there is
/// no active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: Option<PieceKind>,
    offsets: PieceShape,
}

impl Piece {
    /// Piece of the given kind in its spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind: Some(kind),
            offsets: get_shape(kind),
        }
    }

    /// The empty sentinel piece
    pub fn empty() -> Self {
        Self {
            kind: None,
            offsets: EMPTY_SHAPE,
        }
    }

    /// Build a piece from a shape-type id (0 = sentinel, 1-7 = tetrominoes).
    ///
    /// ```
    /// use term_tetris_core::Piece;
    ///
    /// assert!(Piece::from_id(0).unwrap().is_empty());
    /// assert_eq!(Piece::from_id(3).unwrap().shape_id(), 3);
    /// assert!(Piece::from_id(8).is_none());
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::empty()),
            _ => PieceKind::from_id(id).map(Self::new),
        }
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.kind
    }

    /// Shape-type id (0 for the sentinel)
    pub fn shape_id(&self) -> u8 {
        self.kind.map_or(0, PieceKind::id)
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
    }

    pub fn offsets(&self) -> &PieceShape {
        &self.offsets
    }

    pub fn min_x(&self) -> i8 {
        self.offsets.iter().map(|&(x, _)| x).min().unwrap_or(0)
    }

    pub fn max_x(&self) -> i8 {
        self.offsets.iter().map(|&(x, _)| x).max().unwrap_or(0)
    }

    pub fn min_y(&self) -> i8 {
        self.offsets.iter().map(|&(_, y)| y).min().unwrap_or(0)
    }

    pub fn max_y(&self) -> i8 {
        self.offsets.iter().map(|&(_, y)| y).max().unwrap_or(0)
    }

    /// Absolute board cells when anchored at (x, y)
    pub fn cells_at(&self, x: i8, y: i8) -> PieceShape {
        self.offsets.map(|(dx, dy)| (x + dx, y + dy))
    }

    /// Rotate 90° clockwise.
    ///
    /// Each offset maps `(x, y) -> (y, -x)`, then the whole shape is shifted
    /// so `min_x() == 0` and `min_y() == 0`. The receiver is left untouched.
    pub fn rotate_right(&self) -> Self {
        let mut offsets = self.offsets.map(|(x, y)| (y, -x));

        let min_x = offsets.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let min_y = offsets.iter().map(|&(_, y)| y).min().unwrap_or(0);
        for (x, y) in offsets.iter_mut() {
            *x -= min_x.min(0);
            *y -= min_y.min(0);
        }

        Self {
            kind: self.kind,
            offsets,
        }
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<PieceKind> for Piece {
    fn from(kind: PieceKind) -> Self {
        Self::new(kind)
    }
}
