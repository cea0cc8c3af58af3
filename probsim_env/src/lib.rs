//! Probability Simulator Environment Abstraction Layer
//!
//! This crate isolates the one source of non-determinism in the simulator:
//! randomness. Experiments never touch a global RNG; they draw from a
//! [`RandomSource`] that the caller owns and injects.
//!
//! - **Production**: [`EntropySource`] - seeded once from OS entropy
//! - **Testing**: a seeded implementation (see `probsim_sim::SeededSource`)
//!
//! Deriving all entropy from a single 64-bit seed makes every run
//! reproducible via its seed number.
//!
//! # Example
//!
//! ```ignore
//! use probsim_env::{RandomSource, EntropySource};
//!
//! let mut source = EntropySource::new();
//! let face = source.uniform(1, 7)?;
//! let mut deck: Vec<u8> = (1..=52).collect();
//! source.shuffle(&mut deck);
//! ```

mod source;
mod entropy;
mod error;

pub use source::RandomSource;
pub use error::EnvError;
pub use entropy::EntropySource;
