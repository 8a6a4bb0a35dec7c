//! Engine configuration.

/// Rules knobs for a [`GameState`](crate::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the piece randomizer
    pub seed: u32,
    /// Zero the score when `start()` begins a new game. Off by default: the
    /// score accumulates across restarts within one session.
    pub reset_score_on_start: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            reset_score_on_start: false,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
