//! Result records produced by experiments.
//!
//! Each experiment yields one immutable record holding its summary counts
//! and the raw per-trial outcomes they were tallied from.

use crate::experiments::ExperimentId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a coin toss experiment. Raw data uses 0 = tails, 1 = heads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinTossResult {
    pub heads: usize,
    pub tails: usize,
    pub raw_data: Vec<u8>,
}

/// Outcome of a die roll experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DieRollResult {
    /// Face (1..=6) to count; every face is present, even with zero rolls
    pub counts: BTreeMap<u8, usize>,

    pub raw_data: Vec<u8>,
}

/// Outcome of a card draw experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDrawResult {
    pub red: usize,
    pub black: usize,

    /// Drawn cards in draw order (distinct values in 1..=52)
    pub raw_data: Vec<u8>,
}

/// Outcome of a two-coin compound experiment.
///
/// `both_heads` trials are also counted in `at_least_one_head`, so the
/// three counters do not partition the trials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompoundEventResult {
    pub both_heads: usize,
    pub at_least_one_head: usize,
    pub neither_head: usize,

    /// `(flip1, flip2)` per trial, 0 = tails, 1 = heads
    pub raw_data: Vec<(u8, u8)>,
}

/// A result record tagged with the experiment that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "experiment", rename_all = "snake_case")]
pub enum ExperimentResult {
    CoinTosses(CoinTossResult),
    DieRolls(DieRollResult),
    CardDraws(CardDrawResult),
    CompoundEvents(CompoundEventResult),
}

impl ExperimentResult {
    /// Returns the experiment this record belongs to.
    pub fn id(&self) -> ExperimentId {
        match self {
            ExperimentResult::CoinTosses(_) => ExperimentId::CoinTosses,
            ExperimentResult::DieRolls(_) => ExperimentId::DieRolls,
            ExperimentResult::CardDraws(_) => ExperimentId::CardDraws,
            ExperimentResult::CompoundEvents(_) => ExperimentId::CompoundEvents,
        }
    }

    /// Returns the number of trials the record was tallied from.
    pub fn trials(&self) -> usize {
        match self {
            ExperimentResult::CoinTosses(r) => r.raw_data.len(),
            ExperimentResult::DieRolls(r) => r.raw_data.len(),
            ExperimentResult::CardDraws(r) => r.raw_data.len(),
            ExperimentResult::CompoundEvents(r) => r.raw_data.len(),
        }
    }
}

impl From<CoinTossResult> for ExperimentResult {
    fn from(result: CoinTossResult) -> Self {
        ExperimentResult::CoinTosses(result)
    }
}

impl From<DieRollResult> for ExperimentResult {
    fn from(result: DieRollResult) -> Self {
        ExperimentResult::DieRolls(result)
    }
}

impl From<CardDrawResult> for ExperimentResult {
    fn from(result: CardDrawResult) -> Self {
        ExperimentResult::CardDraws(result)
    }
}

impl From<CompoundEventResult> for ExperimentResult {
    fn from(result: CompoundEventResult) -> Self {
        ExperimentResult::CompoundEvents(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_and_trials() {
        let result: ExperimentResult = CoinTossResult {
            heads: 2,
            tails: 1,
            raw_data: vec![1, 0, 1],
        }
        .into();

        assert_eq!(result.id(), ExperimentId::CoinTosses);
        assert_eq!(result.trials(), 3);
    }

    #[test]
    fn test_serialized_tag() {
        let result: ExperimentResult = CardDrawResult {
            red: 1,
            black: 0,
            raw_data: vec![12],
        }
        .into();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["experiment"], "card_draws");
        assert_eq!(value["red"], 1);
        assert_eq!(value["raw_data"][0], 12);
    }
}
