//! Deterministic piece source.
//!
//! A small LCG (Numerical Recipes constants) drives uniform independent
//! draws over the catalog. Each draw is independent by design: there is
//! no bag fairness, so droughts and repeats can happen.

use crate::types::{PieceId, PIECE_KINDS};

/// Linear congruential generator for reproducible piece sequences.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero seed would collapse the sequence.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current state, usable as a seed to continue the sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws catalog indices uniformly at random.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// One uniform draw over the seven catalog entries.
    pub fn draw(&mut self) -> PieceId {
        PieceId(self.rng.next_range(PIECE_KINDS as u32) as u8)
    }

    /// RNG state at this point in the sequence; a session reset carries
    /// it forward instead of reseeding.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_draws_stay_in_catalog_range() {
        let mut source = PieceSource::new(42);
        for _ in 0..1000 {
            let id = source.draw();
            assert!(id.index() < PIECE_KINDS);
        }
    }

    #[test]
    fn test_draws_hit_every_piece_kind() {
        let mut source = PieceSource::new(7);
        let mut seen = [false; PIECE_KINDS];
        for _ in 0..1000 {
            seen[source.draw().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform draws missed a kind");
    }

    #[test]
    fn test_no_bag_fairness() {
        // Independent draws must be able to repeat back to back; a 7-bag
        // could not repeat within the first two draws of every seed.
        let repeated = (0..200u32).any(|seed| {
            let mut source = PieceSource::new(seed);
            source.draw() == source.draw()
        });
        assert!(repeated);
    }
}
