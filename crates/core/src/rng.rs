//! RNG module - random piece selection
//!
//! Pieces are drawn independently and uniformly from the seven kinds. There
//! is no bag, so the same kind may repeat any number of times in a row.
//!
//! The random source is a trait so the session can be driven by a seeded
//! generator in play and a scripted sequence in tests.

use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// Source of uniform integers used for piece selection.
pub trait Randomizer {
    /// Uniform integer in `0..n`. `n` is never zero.
    fn uniform_choice(&mut self, n: u32) -> u32;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn uniform_choice(&mut self, n: u32) -> u32 {
        (**self).uniform_choice(n)
    }
}

/// Draw one piece kind.
pub fn random_kind(rng: &mut impl Randomizer) -> PieceKind {
    let index = rng.uniform_choice(PIECE_KIND_COUNT);
    debug_assert!(index < PIECE_KIND_COUNT, "randomizer out of range: {index}");
    PieceKind::from_index(index % PIECE_KIND_COUNT).unwrap_or(PieceKind::I)
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a short cycle
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
}

impl Randomizer for SimpleRng {
    fn uniform_choice(&mut self, n: u32) -> u32 {
        // Low LCG bits have short periods; take the high half.
        (self.next_u32() >> 16) % n
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_uniform_choice_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.uniform_choice(7) < 7);
        }
    }

    #[test]
    fn test_every_kind_is_drawn() {
        let mut rng = SimpleRng::new(99);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            counts[random_kind(&mut rng).index()] += 1;
        }
        // Roughly uniform: each kind lands well within [500, 1500].
        for (i, c) in counts.iter().enumerate() {
            assert!((500..1500).contains(c), "kind {i} drawn {c} times");
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
        assert_ne!(zero.next_u32(), zero.next_u32());
    }
}
