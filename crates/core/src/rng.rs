//! RNG module - uniform random piece generation
//!
//! Every spawn draws a shape-type uniformly from the seven kinds; there is no
//! bag or preview. A scripted queue replays a fixed sequence for reproducible
//! scenarios.
//!
//! Also provides a simple LCG for deterministic play.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

#[derive(Debug, Clone)]
enum Source {
    Uniform(SimpleRng),
    Scripted { kinds: Vec<PieceKind>, next: usize },
}

/// Supplies the kind of each newly spawned piece.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    seed: u32,
    source: Source,
}

impl PieceQueue {
    /// Uniform random kinds from the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            source: Source::Uniform(SimpleRng::new(seed)),
        }
    }

    /// Replay `kinds` in order, wrapping around. An empty list falls back to
    /// uniform draws seeded with 1.
    pub fn scripted(kinds: &[PieceKind]) -> Self {
        if kinds.is_empty() {
            return Self::new(1);
        }
        Self {
            seed: 0,
            source: Source::Scripted {
                kinds: kinds.to_vec(),
                next: 0,
            },
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Uniform(rng) => PieceKind::ALL[rng.next_range(7) as usize],
            Source::Scripted { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }

    /// Seed the queue was created with (0 for scripted queues)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}
