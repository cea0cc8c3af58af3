//! Error types for the probability simulator.

use probsim_env::EnvError;
use thiserror::Error;

/// Errors that can occur while running or reporting experiments.
#[derive(Debug, Error)]
pub enum SimError {
    /// More cards requested than a deck holds (draws are without replacement)
    #[error("Cannot draw {requested} cards without replacement from a {available}-card deck")]
    TooManyDraws { requested: usize, available: usize },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Experiment name not recognised
    #[error("Unknown experiment: {0}")]
    UnknownExperiment(String),

    /// The random source refused a request
    #[error("Random source error: {0}")]
    Source(#[from] EnvError),

    /// Report serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing a rendered chart failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Creates a too-many-draws error.
    pub fn too_many_draws(requested: usize, available: usize) -> Self {
        Self::TooManyDraws { requested, available }
    }

    /// Creates an invalid-configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
