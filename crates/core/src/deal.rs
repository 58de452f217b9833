//! Deal module - deterministic face ordering for board construction
//!
//! The board itself takes its ordering as given; this module provides the
//! host-side shuffle. Each face identity is laid out exactly twice and
//! shuffled with Fisher-Yates over a simple LCG, so the same seed always
//! deals the same board.

use tui_pairs_types::FaceId;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Deal `pair_count` face pairs in shuffled order.
///
/// The result always satisfies the board invariant (every face exactly
/// twice), so `Board::new(deal(n, seed))` cannot fail for `n > 0`.
pub fn deal(pair_count: usize, seed: u32) -> Vec<FaceId> {
    let mut faces: Vec<FaceId> = (0..pair_count)
        .flat_map(|i| {
            let face = FaceId(i as u16);
            [face, face]
        })
        .collect();
    SimpleRng::new(seed).shuffle(&mut faces);
    faces
}
