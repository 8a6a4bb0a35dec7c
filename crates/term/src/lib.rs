//! Terminal "game renderer" module.
//!
//! Renders a `GameSnapshot` into a simple framebuffer that is flushed to the
//! terminal with crossterm. No widget toolkit; each board cell is two
//! columns wide to keep it roughly square.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
