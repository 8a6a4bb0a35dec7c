//! Terminal Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `term_tetris::{core,input,term,types}`
//! and hosts the binary-side pieces: environment configuration and the
//! JSON-lines session log.

pub mod config;
pub mod session_log;

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
