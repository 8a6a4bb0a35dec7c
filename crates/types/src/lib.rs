//! Core types module - shared data structures and constants
//!
//! Pure data shared by the engine, the terminal view and the session log.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (5, 0)
//!
//! Pieces may only settle down to row `BOARD_HEIGHT - 2`; the last row is
//! never reached by a falling piece.
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_id(3).unwrap();
//! assert_eq!(kind, PieceKind::I);
//! assert_eq!(kind.id(), 3);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor column
pub const SPAWN_X: i8 = 5;

/// Spawn anchor row
pub const SPAWN_Y: i8 = 0;

/// Interval between timed descent steps (milliseconds)
pub const DROP_INTERVAL_MS: u32 = 400;

/// The seven tetromino shape-types.
///
/// Discriminants are the cell ids written into the grid (0 means empty), which
/// also select the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Z = 1,
    S = 2,
    I = 3,
    T = 4,
    O = 5,
    L = 6,
    J = 7,
}

impl PieceKind {
    /// All kinds in id order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Grid cell id (1-7)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by grid cell id. Returns `None` for 0 and anything above 7.
    ///
    /// ```
    /// use term_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_id(7), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Single-letter name
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::Z => "Z",
            PieceKind::S => "S",
            PieceKind::I => "I",
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Grid id of a cell (0 for empty)
#[inline]
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::id)
}

/// Player operations accepted by the engine while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row (lands and spawns when blocked)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece as far as it goes, then spawn the next one
    HardDrop,
}

/// Engine-side event recorded while a state-changing operation runs.
///
/// Consumed by observers (the session log) via `GameState::take_events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GameEvent {
    Started { score: u32 },
    Spawned { kind: PieceKind },
    Landed { kind: PieceKind, x: i8, y: i8 },
    LinesCleared { count: u32, score: u32 },
    GameOver { score: u32 },
}
