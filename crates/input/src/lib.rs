//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the five [`crate::types::GameAction`]s
//! plus the start and quit keys. Each actionable key event produces at most
//! one action; there is no auto-shift timing of our own.

pub mod map;

pub use term_tetris_types as types;

pub use map::{handle_key_event, is_actionable, should_quit, should_start};
