//! RNG module - random pin fall for demo play
//!
//! The scoring engine never rolls for anyone; it only validates and applies the
//! pin counts it is given. Interactive and simulated sessions use [`PinRng`] to
//! pick those counts, bounded by the pins still standing.

use crate::types::PINS_PER_RACK;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct PinRng {
    state: u32,
}

impl PinRng {
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
        // Low LCG bits cycle quickly; the high half is better distributed.
        (self.next_u32() >> 16) % max
    }

    /// Pins knocked down by one delivery, uniform in `0..=standing`.
    pub fn roll(&mut self, standing: u8) -> u8 {
        let standing = standing.min(PINS_PER_RACK);
        self.next_range(standing as u32 + 1) as u8
    }
}
