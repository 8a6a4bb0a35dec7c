use serde::Serialize;

use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Absolute board cells occupied by the piece
    pub cells: [(i8, i8); 4],
}

/// Read-only view of the game for renderers and observers.
///
/// `board` already contains the active piece's cells; `active` is provided so
/// a renderer can tell them apart from settled terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub running: bool,
    pub game_over: bool,
    pub revision: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.score = 0;
        self.running = false;
        self.game_over = false;
        self.revision = 0;
    }

    /// Cell id at (x, y), 0 when empty or off the grid
    pub fn cell(&self, x: i8, y: i8) -> u8 {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return 0;
        }
        self.board[y as usize][x as usize]
    }

    /// Whether (x, y) belongs to the active piece
    pub fn is_active_cell(&self, x: i8, y: i8) -> bool {
        self.active
            .map(|a| a.cells.contains(&(x, y)))
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            running: false,
            game_over: false,
            revision: 0,
        }
    }
}
