//! Error types for the random source abstraction.

use thiserror::Error;

/// Errors that can occur when sampling from a random source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Requested a sample from an empty half-open range
    #[error("Empty sampling range: [{low}, {high})")]
    EmptyRange { low: u32, high: u32 },
}

impl EnvError {
    /// Creates an empty-range error.
    pub fn empty_range(low: u32, high: u32) -> Self {
        Self::EmptyRange { low, high }
    }
}
