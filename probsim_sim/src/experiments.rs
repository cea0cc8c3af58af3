//! Experiment identifiers and their default trial counts.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Default number of coin tosses.
pub const DEFAULT_TOSSES: usize = 100;

/// Default number of die rolls.
pub const DEFAULT_ROLLS: usize = 60;

/// Default number of card draws.
pub const DEFAULT_DRAWS: usize = 20;

/// Default number of two-coin trials.
pub const DEFAULT_TRIALS: usize = 50;

/// Experiment identifiers, also the keys of a session's result store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentId {
    /// Fair coin tossed N times
    CoinTosses,

    /// Six-sided die rolled N times
    DieRolls,

    /// N cards drawn without replacement from a shuffled deck
    CardDraws,

    /// Two fair coins flipped together, N trials
    CompoundEvents,
}

impl ExperimentId {
    /// Returns all experiments in canonical run order.
    pub fn all() -> Vec<ExperimentId> {
        vec![
            ExperimentId::CoinTosses,
            ExperimentId::DieRolls,
            ExperimentId::CardDraws,
            ExperimentId::CompoundEvents,
        ]
    }

    /// Returns the experiment's store key.
    pub fn name(&self) -> &'static str {
        match self {
            ExperimentId::CoinTosses => "coin_tosses",
            ExperimentId::DieRolls => "die_rolls",
            ExperimentId::CardDraws => "card_draws",
            ExperimentId::CompoundEvents => "compound_events",
        }
    }

    /// Returns the singular noun used in user-facing messages.
    pub fn noun(&self) -> &'static str {
        match self {
            ExperimentId::CoinTosses => "coin toss",
            ExperimentId::DieRolls => "die roll",
            ExperimentId::CardDraws => "card draw",
            ExperimentId::CompoundEvents => "compound event",
        }
    }

    /// Returns a description of the experiment.
    pub fn description(&self) -> &'static str {
        match self {
            ExperimentId::CoinTosses => "Toss a fair coin and count heads vs. tails",
            ExperimentId::DieRolls => "Roll a six-sided die and tally each face",
            ExperimentId::CardDraws => "Draw from a shuffled 52-card deck and count red vs. black",
            ExperimentId::CompoundEvents => "Flip two coins per trial and count joint outcomes",
        }
    }

    /// Returns the trial count used when none is configured.
    pub fn default_trials(&self) -> usize {
        match self {
            ExperimentId::CoinTosses => DEFAULT_TOSSES,
            ExperimentId::DieRolls => DEFAULT_ROLLS,
            ExperimentId::CardDraws => DEFAULT_DRAWS,
            ExperimentId::CompoundEvents => DEFAULT_TRIALS,
        }
    }

    /// Message shown when presentation is requested before any run.
    pub fn not_run_message(&self) -> String {
        format!("No {} simulation has been run yet.", self.noun())
    }
}

impl std::fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ExperimentId {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "coin_tosses" | "cointosses" | "coin" | "coins" => Ok(ExperimentId::CoinTosses),
            "die_rolls" | "dierolls" | "die" | "dice" => Ok(ExperimentId::DieRolls),
            "card_draws" | "carddraws" | "card" | "cards" => Ok(ExperimentId::CardDraws),
            "compound_events" | "compoundevents" | "compound" => Ok(ExperimentId::CompoundEvents),
            _ => Err(SimError::UnknownExperiment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(
            ExperimentId::all(),
            vec![
                ExperimentId::CoinTosses,
                ExperimentId::DieRolls,
                ExperimentId::CardDraws,
                ExperimentId::CompoundEvents,
            ]
        );
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for id in ExperimentId::all() {
            assert_eq!(id.name().parse::<ExperimentId>().unwrap(), id);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("Dice".parse::<ExperimentId>().unwrap(), ExperimentId::DieRolls);
        assert_eq!("cards".parse::<ExperimentId>().unwrap(), ExperimentId::CardDraws);
        assert!(matches!(
            "roulette".parse::<ExperimentId>(),
            Err(SimError::UnknownExperiment(name)) if name == "roulette"
        ));
    }

    #[test]
    fn test_default_trials() {
        assert_eq!(ExperimentId::CoinTosses.default_trials(), 100);
        assert_eq!(ExperimentId::DieRolls.default_trials(), 60);
        assert_eq!(ExperimentId::CardDraws.default_trials(), 20);
        assert_eq!(ExperimentId::CompoundEvents.default_trials(), 50);
    }

    #[test]
    fn test_not_run_message() {
        assert_eq!(
            ExperimentId::CoinTosses.not_run_message(),
            "No coin toss simulation has been run yet."
        );
    }

    #[test]
    fn test_serde_name_matches_store_key() {
        let json = serde_json::to_string(&ExperimentId::CompoundEvents).unwrap();
        assert_eq!(json, "\"compound_events\"");
    }
}
