//! Seeded shape-kind selection
//!
//! The one place randomness enters the core. A small LCG keeps the crate
//! dependency-free and, more importantly, makes every spawn sequence a pure
//! function of the seed, so game-over-on-blocked-spawn scenarios replay
//! exactly in tests.

use multris_types::ShapeKind;

/// Simple LCG (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a generator from a seed. Zero is remapped to avoid the
    /// all-zero fixed point.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a shape kind uniformly from the supported set.
    pub fn next_kind(&mut self) -> ShapeKind {
        let idx = self.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}
