//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management. It has **no
//! dependencies** on UI, timing, or I/O:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: Runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid storage, row tests and the line-clear shift
//! - [`pieces`]: Tetromino shapes, bounding queries and right rotation
//! - [`game_state`]: Placement engine, descent, line clearing, spawn/game over
//! - [`rng`]: Uniform piece randomizer and scripted piece sequences
//! - [`snapshot`]: Read-only view handed to renderers
//! - [`config`]: Engine rule knobs
//!
//! # Game Rules
//!
//! - Pieces spawn at anchor (5, 0) with a uniformly random shape
//! - A piece may descend until its lowest cell reaches row 18
//! - Rotation is clockwise around the piece's own offsets; there are no wall kicks
//! - Each cleared row scores one point
//! - A blocked spawn ends the game and clears the grid
//!
//! # Example
//!
//! ```
//! use term_tetris_core::GameState;
//! use term_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // The timer drives descent.
//! game.advance();
//! assert!(game.running());
//! ```
//!
//! # Timing
//!
//! The core does not keep time. Call [`GameState::advance`] once per
//! [`DROP_INTERVAL_MS`](term_tetris_types::DROP_INTERVAL_MS) from whatever
//! scheduler drives the game, and route input through
//! [`GameState::apply_action`] on the same thread.

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game_state::{GameState, FLOOR_ROW};
pub use pieces::{get_shape, Piece, PieceShape};
pub use rng::{PieceQueue, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
