//! Core random source trait for probability experiments.

use crate::EnvError;

/// The central interface for randomness.
///
/// Experiments are written against this trait so they can run against
/// OS entropy in production and a fixed seed in tests.
///
/// # Implementations
///
/// - **Production**: `EntropySource` - `StdRng` seeded from the OS
/// - **Simulation**: `SeededSource` - `ChaCha8Rng` seeded from a `u64`
///
/// # Determinism
///
/// Two sources built from the same seed must yield identical sequences
/// for identical call sequences.
pub trait RandomSource {
    /// Samples an integer uniformly from the half-open range `[low, high)`.
    ///
    /// Returns `EnvError::EmptyRange` when `low >= high`.
    fn uniform(&mut self, low: u32, high: u32) -> Result<u32, EnvError>;

    /// Shuffles `items` in place; every permutation is equally likely.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Returns the source's seed (for logging/debugging).
    ///
    /// In production, returns 0 (not reproducibly seeded).
    fn seed(&self) -> u64;
}

/// Validates a half-open range before sampling.
pub(crate) fn check_range(low: u32, high: u32) -> Result<(), EnvError> {
    if low >= high {
        return Err(EnvError::empty_range(low, high));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(check_range(0, 2).is_ok());
        assert_eq!(check_range(3, 3), Err(EnvError::empty_range(3, 3)));
        assert_eq!(check_range(7, 1), Err(EnvError::empty_range(7, 1)));
    }
}
