//! Game state module - manages the complete game state
//!
//! Owns the grid, the active piece and its anchor, the score and the running
//! flag. Every mutation goes through a method here.
//!
//! The active piece is always drawn into the grid. Placement attempts validate
//! the candidate cells against the grid with the piece's own cells ignored and
//! only touch the grid once the attempt is accepted, so a rejected attempt
//! leaves the board exactly as it was.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::pieces::{Piece, PieceShape};
use crate::rng::PieceQueue;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Lowest row a piece cell may occupy. One above the last grid row.
pub const FLOOR_ROW: i8 = BOARD_HEIGHT as i8 - 2;

/// Upper bound on rows removed by one line-clear pass
pub const MAX_CLEARED_ROWS: usize = BOARD_HEIGHT as usize;

/// Most events a single `start`, `apply_action` or `advance` records
/// (landed, spawned or game over, lines cleared).
const MAX_EVENTS_PER_CALL: usize = 3;

/// Events retained until the next `take_events`. The runner drains once per
/// loop turn, and a turn handles one key and one timed step. Anything past
/// this evicts the oldest event.
const EVENT_CAPACITY: usize = 8;

const _: () = assert!(EVENT_CAPACITY >= 2 * MAX_EVENTS_PER_CALL);

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// Active piece; the empty sentinel when there is none
    active: Piece,
    x: i8,
    y: i8,
    piece_queue: PieceQueue,
    config: GameConfig,
    score: u32,
    running: bool,
    game_over: bool,
    /// Bumped on every change a renderer could observe
    revision: u64,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig::with_seed(seed))
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::with_queue(config, PieceQueue::new(config.seed))
    }

    /// Game whose spawns replay `kinds` in order (wrapping around)
    pub fn with_pieces(kinds: &[PieceKind]) -> Self {
        Self::with_queue(GameConfig::default(), PieceQueue::scripted(kinds))
    }

    pub fn with_queue(config: GameConfig, piece_queue: PieceQueue) -> Self {
        Self {
            board: Board::new(),
            active: Piece::empty(),
            x: SPAWN_X,
            y: SPAWN_Y,
            piece_queue,
            config,
            score: 0,
            running: false,
            game_over: false,
            revision: 0,
            events: ArrayVec::new(),
        }
    }

    /// Start (or restart) a game: clear the grid, mark running and spawn the
    /// first piece.
    pub fn start(&mut self) {
        self.board.clear();
        if self.config.reset_score_on_start {
            self.score = 0;
        }
        self.active = Piece::empty();
        self.x = SPAWN_X;
        self.y = SPAWN_Y;
        self.running = true;
        self.game_over = false;
        self.record(GameEvent::Started { score: self.score });
        self.bump();
        self.spawn_piece();
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// True once a spawn has failed; cleared by `start`.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn seed(&self) -> u32 {
        self.piece_queue.seed()
    }

    /// Active piece, `None` when only the sentinel is installed
    pub fn active(&self) -> Option<Piece> {
        (!self.active.is_empty()).then_some(self.active)
    }

    /// Anchor of the active piece
    pub fn anchor(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Absolute cells of the active piece
    pub fn active_cells(&self) -> Option<PieceShape> {
        self.active().map(|p| p.cells_at(self.x, self.y))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct grid access for setting up scenarios. Writing over the active
    /// piece's cells breaks the grid/active-piece correspondence.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.kind().map(|kind| ActiveSnapshot {
            kind,
            x: self.x,
            y: self.y,
            cells: self.active.cells_at(self.x, self.y),
        });
        out.score = self.score;
        out.running = self.running;
        out.game_over = self.game_over;
        out.revision = self.revision;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Drain events recorded since the last call, oldest first
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    /// Whether `piece` anchored at (x, y) stays inside the playable area and
    /// only covers cells that are empty or belong to the active piece.
    pub fn can_place(&self, piece: &Piece, x: i8, y: i8) -> bool {
        if piece.is_empty() {
            return false;
        }

        if piece.min_x() + x < 0
            || piece.max_x() + x > BOARD_WIDTH as i8 - 1
            || piece.min_y() + y < 0
            || piece.max_y() + y > FLOOR_ROW
        {
            return false;
        }

        let own = self.active_cells();
        piece.cells_at(x, y).iter().all(|cell| {
            !self.board.is_occupied(cell.0, cell.1) || own.is_some_and(|o| o.contains(cell))
        })
    }

    /// Move the active piece to a new anchor.
    /// Returns false (grid untouched) when out of bounds, blocked or not running.
    pub fn try_reposition(&mut self, new_x: i8, new_y: i8) -> bool {
        if !self.running {
            return false;
        }
        let piece = self.active;
        if !self.can_place(&piece, new_x, new_y) {
            return false;
        }
        self.commit(piece, new_x, new_y);
        true
    }

    /// Move the active piece by (dx, dy)
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        self.try_reposition(self.x + dx, self.y + dy)
    }

    /// Rotate the active piece clockwise in place (the anchor does not move).
    pub fn try_rotate(&mut self) -> bool {
        if !self.running || self.active.is_empty() {
            return false;
        }
        let rotated = self.active.rotate_right();
        if !self.can_place(&rotated, self.x, self.y) {
            return false;
        }
        self.commit(rotated, self.x, self.y);
        true
    }

    /// Drop one row. When blocked the piece lands and the next one spawns.
    /// Returns whether the piece moved.
    pub fn descend(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.land();
        self.spawn_piece();
        false
    }

    /// Drop until blocked, land, spawn. Returns the number of rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.running {
            return 0;
        }
        let mut rows = 0;
        while self.try_move(0, 1) {
            rows += 1;
        }
        self.land();
        self.spawn_piece();
        rows
    }

    /// Remove full rows and return their indices in scan order.
    ///
    /// The active piece is lifted out of the grid first so it never completes
    /// a row, then redrawn at its anchor. Rows are scanned bottom to top; each
    /// full row scores one point and the rows above it (down to row 2) shift
    /// down. The row that just received the shifted contents is not
    /// re-examined in the same pass.
    pub fn clear_full_lines(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        let active = self.active;

        self.board.erase(&active, self.x, self.y);
        for row in (0..BOARD_HEIGHT as usize).rev() {
            if self.board.is_row_full(row) {
                self.score += 1;
                self.board.shift_down_into(row);
                cleared.push(row);
            }
        }
        self.board.paint(&active, self.x, self.y);

        if !cleared.is_empty() {
            self.record(GameEvent::LinesCleared {
                count: cleared.len() as u32,
                score: self.score,
            });
            self.bump();
        }
        cleared
    }

    /// Spawn a random piece at the spawn anchor.
    ///
    /// Any current piece is left in the grid as settled terrain. If the spawn
    /// cells are blocked the game ends: the sentinel is installed, the grid is
    /// cleared and `running` drops to false. Does nothing while not running.
    pub fn spawn_piece(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let piece = Piece::new(self.piece_queue.draw());

        self.active = Piece::empty();
        self.x = SPAWN_X;
        self.y = SPAWN_Y;

        if !self.can_place(&piece, SPAWN_X, SPAWN_Y) {
            self.board.clear();
            self.running = false;
            self.game_over = true;
            self.record(GameEvent::GameOver { score: self.score });
            self.bump();
            return false;
        }

        self.commit(piece, SPAWN_X, SPAWN_Y);
        if let Some(kind) = piece.kind() {
            self.record(GameEvent::Spawned { kind });
        }
        true
    }

    /// Timed step: descend one row, then clear full lines.
    /// Does nothing while the game is not running.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let moved = self.descend();
        self.clear_full_lines();
        moved
    }

    /// Apply a player action. Ignored while the game is not running.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.running {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.descend(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Leave the active piece's cells in the grid as terrain.
    fn land(&mut self) {
        if let Some(kind) = self.active.kind() {
            self.record(GameEvent::Landed {
                kind,
                x: self.x,
                y: self.y,
            });
        }
        self.active = Piece::empty();
    }

    fn commit(&mut self, piece: Piece, x: i8, y: i8) {
        let old = self.active;
        self.board.erase(&old, self.x, self.y);
        self.board.paint(&piece, x, y);
        self.active = piece;
        self.x = x;
        self.y = y;
        self.bump();
    }

    fn record(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
