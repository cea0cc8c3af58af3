//! Seeded random source implementing RandomSource for deterministic runs.

use probsim_env::{EnvError, RandomSource};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source backed by a seeded ChaCha8 RNG.
///
/// Two sources created with the same seed produce the same stream, so an
/// experiment run against one can be replayed exactly from its seed.
#[derive(Debug, Clone)]
pub struct SeededSource {
    /// Master seed for this source
    seed: u64,

    /// Deterministic RNG for all draws
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Creates a new SeededSource with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Derives an independent source from this seed and a stream number.
    ///
    /// The derived stream depends only on `(seed, stream)`, never on how
    /// many draws this source has already made.
    pub fn derive(&self, stream: u64) -> Self {
        let combined_seed = self.seed.wrapping_mul(0x517cc1b727220a95) ^ stream;
        Self::new(combined_seed)
    }

    /// Rewinds the source to the start of its stream.
    pub fn rewind(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }
}

impl RandomSource for SeededSource {
    fn uniform(&mut self, low: u32, high: u32) -> Result<u32, EnvError> {
        if low >= high {
            return Err(EnvError::empty_range(low, high));
        }
        Ok(self.rng.gen_range(low..high))
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(source: &mut SeededSource, n: usize) -> Vec<u32> {
        (0..n).map(|_| source.uniform(0, 100).unwrap()).collect()
    }

    #[test]
    fn test_seeded_source_deterministic() {
        let mut source1 = SeededSource::new(42);
        let mut source2 = SeededSource::new(42);

        assert_eq!(draw(&mut source1, 32), draw(&mut source2, 32));
    }

    #[test]
    fn test_seeded_source_different_seeds() {
        let mut source1 = SeededSource::new(42);
        let mut source2 = SeededSource::new(43);

        assert_ne!(draw(&mut source1, 32), draw(&mut source2, 32));
    }

    #[test]
    fn test_seeded_source_shuffle_deterministic() {
        let mut source1 = SeededSource::new(7);
        let mut source2 = SeededSource::new(7);

        let mut deck1: Vec<u8> = (1..=52).collect();
        let mut deck2: Vec<u8> = (1..=52).collect();
        source1.shuffle(&mut deck1);
        source2.shuffle(&mut deck2);

        assert_eq!(deck1, deck2);
        assert_ne!(deck1, (1..=52).collect::<Vec<u8>>());
    }

    #[test]
    fn test_seeded_source_rejects_empty_range() {
        let mut source = SeededSource::new(42);
        assert_eq!(source.uniform(5, 5), Err(EnvError::empty_range(5, 5)));
    }

    #[test]
    fn test_seeded_source_rewind() {
        let mut source = SeededSource::new(42);
        let first = draw(&mut source, 8);

        source.rewind();
        assert_eq!(draw(&mut source, 8), first);
    }

    #[test]
    fn test_derived_streams_isolated() {
        let mut base = SeededSource::new(42);
        let untouched = base.derive(1);
        let _ = draw(&mut base, 100);
        let after_draws = base.derive(1);

        // Prior draws on the parent don't shift the derived stream
        assert_eq!(untouched.seed(), after_draws.seed());
        assert_ne!(base.derive(1).seed(), base.derive(2).seed());
    }

    #[test]
    fn test_seeded_source_seed() {
        let source = SeededSource::new(12345);
        assert_eq!(source.seed(), 12345);
    }
}
