//! Seeded random stream shared by map generation and turn resolution.
//!
//! All draws go through one `ChaCha8Rng` stream consumed in a fixed call
//! order per turn, so a fixed seed reproduces a whole run.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw in `min..=max`.
    pub fn roll(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (max - min + 1) as u32;
        min + (self.inner.next_u32() % span) as i32
    }

    pub fn roll_usize(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max);
        let span = (max - min) as u64 + 1;
        min + (self.inner.next_u64() % span) as usize
    }

    /// True with a `percent` in 100 chance.
    pub fn percent(&mut self, percent: i32) -> bool {
        self.roll(1, 100) <= percent
    }

    pub fn coin_flip(&mut self) -> bool {
        self.inner.next_u32() & 1 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_same_sequence() {
        let mut a = GameRng::seed_from_u64(2026);
        let mut b = GameRng::seed_from_u64(2026);
        for _ in 0..64 {
            assert_eq!(a.roll(0, 1000), b.roll(0, 1000));
        }
    }

    #[test]
    fn roll_stays_within_inclusive_bounds() {
        let mut rng = GameRng::seed_from_u64(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2000 {
            let value = rng.roll(1, 4);
            assert!((1..=4).contains(&value));
            seen_min |= value == 1;
            seen_max |= value == 4;
        }
        assert!(seen_min && seen_max, "both bounds should be reachable");
    }

    #[test]
    fn percent_zero_never_and_hundred_always() {
        let mut rng = GameRng::seed_from_u64(99);
        for _ in 0..200 {
            assert!(!rng.percent(0));
            assert!(rng.percent(100));
        }
    }

    #[test]
    fn roll_usize_handles_degenerate_range() {
        let mut rng = GameRng::seed_from_u64(1);
        assert_eq!(rng.roll_usize(3, 3), 3);
    }
}
