//! RNG module - seeded orb generation
//!
//! Every random orb on the board (initial fill and cascade refill) is a uniform draw
//! from the configured [`OrbSet`]. The draw goes through the [`OrbSource`] trait so
//! callers can script refills in tests; [`SimpleRng`] is the production source.

use crate::types::{OrbSet, OrbType};

/// Supplies orbs for empty cells
pub trait OrbSource {
    /// Draw one orb uniformly from `available`, or `None` if the set is empty
    fn next_orb(&mut self, available: &OrbSet) -> Option<OrbType>;
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
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current state (re-seeding with it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl OrbSource for SimpleRng {
    fn next_orb(&mut self, available: &OrbSet) -> Option<OrbType> {
        if available.is_empty() {
            return None;
        }
        let idx = self.next_range(available.len() as u32) as usize;
        available.nth(idx)
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
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..10 {
            for _ in 0..200 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_orbs_come_from_available_set() {
        let mut rng = SimpleRng::new(99);
        let available = OrbSet::from_slice(&[OrbType::Water, OrbType::Heal]);
        let mut seen = OrbSet::empty();
        for _ in 0..100 {
            let orb = rng.next_orb(&available).unwrap();
            assert!(available.contains(orb), "{orb} not available");
            seen.insert(orb);
        }
        assert_eq!(seen, available);
    }

    #[test]
    fn test_orb_distribution_is_roughly_uniform() {
        let mut rng = SimpleRng::new(2024);
        let available = OrbSet::standard();
        let mut counts = [0u32; 6];
        for _ in 0..5000 {
            counts[rng.next_orb(&available).unwrap() as usize] += 1;
        }
        for orb in available.iter() {
            let c = counts[orb as usize];
            assert!((800..1200).contains(&c), "{orb}: {c}");
        }
        assert_eq!(counts[OrbType::Heal as usize], 0);
    }

    #[test]
    fn test_empty_set_draws_nothing() {
        let mut rng = SimpleRng::new(3);
        let state = rng.state();
        assert_eq!(rng.next_orb(&OrbSet::empty()), None);
        assert_eq!(rng.state(), state);
    }
}
