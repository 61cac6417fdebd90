//! Seeded randomness for map generation
//!
//! A whole generation run draws from one [`MapRng`]. Keeping the seed next
//! to the stream lets the CLI print it, so any map can be rebuilt later.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream plus the seed it started from
#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MapRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Start from a seed drawn from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform roll in `0..n`, or 0 for an empty range
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rolls_cover_percent_range() {
        let mut rng = MapRng::new(7);
        let mut seen = [false; 100];
        for _ in 0..10_000 {
            seen[rng.rn2(100) as usize] = true;
        }
        // fill thresholds rely on both 0 and 99 coming up
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let rolls = |seed| {
            let mut rng = MapRng::new(seed);
            (0..64).map(|_| rng.rn2(100)).collect::<Vec<_>>()
        };
        assert_eq!(rolls(2024), rolls(2024));
        assert_ne!(rolls(2024), rolls(2025));
    }

    #[test]
    fn test_clone_continues_the_stream() {
        let mut rng = MapRng::new(11);
        rng.rn2(100);
        let mut copy = rng.clone();
        assert_eq!(copy.seed(), 11);
        assert_eq!(rng.rn2(1000), copy.rn2(1000));
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = MapRng::new(3);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.rn2(1), 0);
    }
}
