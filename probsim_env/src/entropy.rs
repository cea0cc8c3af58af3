//! Production implementation of RandomSource using OS entropy.

use crate::source::check_range;
use crate::{EnvError, RandomSource};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Production random source seeded from OS entropy.
///
/// This is the "real" implementation used by the CLI when no seed is given.
/// Each construction yields an independent, non-reproducible stream.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Creates a new EntropySource seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn uniform(&mut self, low: u32, high: u32) -> Result<u32, EnvError> {
        check_range(low, high)?;
        Ok(self.rng.gen_range(low..high))
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    fn seed(&self) -> u64 {
        // Production is not seeded
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_uniform_in_range() {
        let mut source = EntropySource::new();
        for _ in 0..1000 {
            let value = source.uniform(1, 7).unwrap();
            assert!((1..7).contains(&value));
        }
    }

    #[test]
    fn test_entropy_rejects_empty_range() {
        let mut source = EntropySource::new();
        assert_eq!(source.uniform(2, 2), Err(EnvError::empty_range(2, 2)));
    }

    #[test]
    fn test_entropy_shuffle_is_permutation() {
        let mut source = EntropySource::new();
        let mut deck: Vec<u8> = (1..=52).collect();
        source.shuffle(&mut deck);

        let mut sorted = deck.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=52).collect::<Vec<u8>>());
    }

    #[test]
    fn test_entropy_seed() {
        let source = EntropySource::new();
        assert_eq!(source.seed(), 0);
    }
}
