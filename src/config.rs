//! Runtime configuration read from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TETRIS_SEED` | piece randomizer seed | derived from the clock |
//! | `TETRIS_DROP_MS` | timed descent interval | 400 |
//! | `TETRIS_RESET_SCORE` | `1`/`true` zeroes the score on restart | off |
//! | `TETRIS_LOG_PATH` | append game events as JSON lines | none |

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub drop_interval_ms: u32,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            drop_interval_ms: DROP_INTERVAL_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let reset_score_on_start = lookup("TETRIS_RESET_SCORE")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        let drop_interval_ms = lookup("TETRIS_DROP_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(DROP_INTERVAL_MS);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            game: GameConfig {
                seed,
                reset_score_on_start,
            },
            drop_interval_ms,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
