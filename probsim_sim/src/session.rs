//! SimSession - owns the random source and the latest result per experiment.

use crate::context::SeededSource;
use crate::error::SimError;
use crate::experiments::{ExperimentId, DEFAULT_DRAWS, DEFAULT_ROLLS, DEFAULT_TOSSES, DEFAULT_TRIALS};
use crate::presentation::{self, ChartSink, Presentation};
use crate::results::{
    CardDrawResult, CoinTossResult, CompoundEventResult, DieRollResult, ExperimentResult,
};
use crate::runner::{self, DECK_SIZE};

use probsim_env::{EntropySource, RandomSource};
use std::collections::HashMap;
use tracing::info;

/// Configuration for a simulation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Seed for `SeededSource` sessions (the CLI treats 0 as "use OS entropy")
    pub seed: u64,

    /// Coin tosses per run
    pub num_tosses: usize,

    /// Die rolls per run
    pub num_rolls: usize,

    /// Cards drawn per run (at most 52)
    pub num_draws: usize,

    /// Two-coin trials per run
    pub num_trials: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            num_tosses: DEFAULT_TOSSES,
            num_rolls: DEFAULT_ROLLS,
            num_draws: DEFAULT_DRAWS,
            num_trials: DEFAULT_TRIALS,
        }
    }
}

impl SimConfig {
    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the trial count for one experiment.
    pub fn with_trials(mut self, experiment: ExperimentId, trials: usize) -> Self {
        match experiment {
            ExperimentId::CoinTosses => self.num_tosses = trials,
            ExperimentId::DieRolls => self.num_rolls = trials,
            ExperimentId::CardDraws => self.num_draws = trials,
            ExperimentId::CompoundEvents => self.num_trials = trials,
        }
        self
    }

    /// Returns the configured trial count for an experiment.
    pub fn trials(&self, experiment: ExperimentId) -> usize {
        match experiment {
            ExperimentId::CoinTosses => self.num_tosses,
            ExperimentId::DieRolls => self.num_rolls,
            ExperimentId::CardDraws => self.num_draws,
            ExperimentId::CompoundEvents => self.num_trials,
        }
    }

    /// Rejects trial counts no experiment could honour.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_draws > DECK_SIZE {
            return Err(SimError::invalid_config(format!(
                "num_draws={} exceeds the {}-card deck",
                self.num_draws, DECK_SIZE
            )));
        }
        Ok(())
    }
}

/// A simulation session - the container for experiment results.
///
/// Each experiment call replaces the stored result for that experiment;
/// only the latest result per experiment is retained.
pub struct SimSession<R: RandomSource> {
    /// Configuration (default trial counts)
    config: SimConfig,

    /// Injected random source
    source: R,

    /// Latest result per experiment
    results: HashMap<ExperimentId, ExperimentResult>,
}

impl SimSession<SeededSource> {
    /// Creates a reproducible session seeded from `config.seed`.
    pub fn seeded(config: SimConfig) -> Result<Self, SimError> {
        let source = SeededSource::new(config.seed);
        Self::with_source(source, config)
    }
}

impl SimSession<EntropySource> {
    /// Creates a session drawing from OS entropy.
    pub fn from_entropy(config: SimConfig) -> Result<Self, SimError> {
        Self::with_source(EntropySource::new(), config)
    }
}

impl<R: RandomSource> SimSession<R> {
    /// Creates a session over `source` with default trial counts.
    pub fn new(source: R) -> Self {
        Self {
            config: SimConfig::default(),
            source,
            results: HashMap::new(),
        }
    }

    /// Creates a session over `source` with a validated configuration.
    pub fn with_source(source: R, config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            results: HashMap::new(),
        })
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Returns the random source's seed (0 for entropy sources).
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    /// Tosses a coin `num_tosses` times and stores the result.
    pub fn simulate_coin_tosses(&mut self, num_tosses: usize) -> Result<CoinTossResult, SimError> {
        let result = runner::toss_coins(&mut self.source, num_tosses)?;
        self.store(result.clone().into());
        Ok(result)
    }

    /// Rolls a die `num_rolls` times and stores the result.
    pub fn simulate_die_rolls(&mut self, num_rolls: usize) -> Result<DieRollResult, SimError> {
        let result = runner::roll_die(&mut self.source, num_rolls)?;
        self.store(result.clone().into());
        Ok(result)
    }

    /// Draws `num_draws` cards and stores the result.
    ///
    /// Rejects more than 52 draws; the previous result is left untouched.
    pub fn simulate_card_draws(&mut self, num_draws: usize) -> Result<CardDrawResult, SimError> {
        let result = runner::draw_cards(&mut self.source, num_draws)?;
        self.store(result.clone().into());
        Ok(result)
    }

    /// Runs `num_trials` two-coin trials and stores the result.
    pub fn simulate_compound_events(
        &mut self,
        num_trials: usize,
    ) -> Result<CompoundEventResult, SimError> {
        let result = runner::flip_coin_pairs(&mut self.source, num_trials)?;
        self.store(result.clone().into());
        Ok(result)
    }

    /// Runs an experiment with its configured trial count.
    pub fn run(&mut self, experiment: ExperimentId) -> Result<&ExperimentResult, SimError> {
        let trials = self.config.trials(experiment);
        let result: ExperimentResult = match experiment {
            ExperimentId::CoinTosses => runner::toss_coins(&mut self.source, trials)?.into(),
            ExperimentId::DieRolls => runner::roll_die(&mut self.source, trials)?.into(),
            ExperimentId::CardDraws => runner::draw_cards(&mut self.source, trials)?.into(),
            ExperimentId::CompoundEvents => {
                runner::flip_coin_pairs(&mut self.source, trials)?.into()
            }
        };
        self.store(result);
        Ok(&self.results[&experiment])
    }

    /// Runs every experiment in canonical order, presenting each after it runs.
    pub fn run_all<S: ChartSink>(&mut self, sink: &mut S) -> Result<(), SimError> {
        for experiment in ExperimentId::all() {
            info!("Running {} simulation...", experiment.noun());
            self.run(experiment)?;
            sink.show(&self.present(experiment))?;
        }
        Ok(())
    }

    /// Returns the latest result for an experiment, if it has run.
    pub fn result(&self, experiment: ExperimentId) -> Option<&ExperimentResult> {
        self.results.get(&experiment)
    }

    /// Returns stored results in canonical order.
    pub fn results(&self) -> impl Iterator<Item = &ExperimentResult> + '_ {
        ExperimentId::all()
            .into_iter()
            .filter_map(move |experiment| self.results.get(&experiment))
    }

    /// Builds the presentation for an experiment from its stored result.
    pub fn present(&self, experiment: ExperimentId) -> Presentation {
        presentation::present(experiment, self.result(experiment))
    }

    /// Forgets all stored results.
    pub fn clear(&mut self) {
        self.results.clear();
    }

    fn store(&mut self, result: ExperimentResult) {
        self.results.insert(result.id(), result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every presentation it is shown.
    #[derive(Default)]
    struct RecordingSink {
        shown: Vec<Presentation>,
    }

    impl ChartSink for RecordingSink {
        fn show(&mut self, presentation: &Presentation) -> Result<(), SimError> {
            self.shown.push(presentation.clone());
            Ok(())
        }
    }

    fn session(seed: u64) -> SimSession<SeededSource> {
        SimSession::seeded(SimConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn test_session_starts_empty() {
        let session = session(42);

        for experiment in ExperimentId::all() {
            assert!(session.result(experiment).is_none());
        }
        assert_eq!(session.results().count(), 0);
    }

    #[test]
    fn test_overwrite_semantics() {
        let mut session = session(42);

        session.simulate_coin_tosses(10).unwrap();
        session.simulate_coin_tosses(25).unwrap();

        let stored = session.result(ExperimentId::CoinTosses).unwrap();
        assert_eq!(stored.trials(), 25);
        assert_eq!(session.results().count(), 1);
    }

    #[test]
    fn test_returned_result_matches_stored() {
        let mut session = session(42);
        let result = session.simulate_compound_events(30).unwrap();

        assert_eq!(
            session.result(ExperimentId::CompoundEvents),
            Some(&ExperimentResult::CompoundEvents(result))
        );
    }

    #[test]
    fn test_deterministic_sessions() {
        let mut session1 = session(7);
        let mut session2 = session(7);

        assert_eq!(
            session1.simulate_die_rolls(100).unwrap(),
            session2.simulate_die_rolls(100).unwrap()
        );
        assert_eq!(
            session1.simulate_card_draws(52).unwrap(),
            session2.simulate_card_draws(52).unwrap()
        );
    }

    #[test]
    fn test_overdraw_keeps_previous_result() {
        let mut session = session(42);
        let first = session.simulate_card_draws(5).unwrap();

        assert!(matches!(
            session.simulate_card_draws(60),
            Err(SimError::TooManyDraws { requested: 60, .. })
        ));
        assert_eq!(
            session.result(ExperimentId::CardDraws),
            Some(&ExperimentResult::CardDraws(first))
        );
    }

    #[test]
    fn test_run_uses_configured_trials() {
        let config = SimConfig::default()
            .with_seed(42)
            .with_trials(ExperimentId::DieRolls, 12);
        let mut session = SimSession::seeded(config).unwrap();

        assert_eq!(session.run(ExperimentId::DieRolls).unwrap().trials(), 12);
        assert_eq!(session.run(ExperimentId::CoinTosses).unwrap().trials(), 100);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig::default().with_trials(ExperimentId::CardDraws, 53);

        assert!(matches!(
            SimSession::seeded(config),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_all_order_and_defaults() {
        let mut session = session(42);
        let mut sink = RecordingSink::default();

        session.run_all(&mut sink).unwrap();

        let order: Vec<ExperimentId> = sink.shown.iter().map(|p| p.experiment()).collect();
        assert_eq!(order, ExperimentId::all());
        assert!(sink.shown.iter().all(|p| p.chart().is_some()));

        let trials: Vec<usize> = session.results().map(|r| r.trials()).collect();
        assert_eq!(trials, vec![100, 60, 20, 50]);
    }

    #[test]
    fn test_present_before_run() {
        let session = session(42);

        assert_eq!(
            session.present(ExperimentId::CompoundEvents),
            Presentation::NotRun { experiment: ExperimentId::CompoundEvents }
        );
    }

    #[test]
    fn test_clear() {
        let mut session = session(42);
        session.simulate_coin_tosses(3).unwrap();
        session.clear();

        assert!(session.result(ExperimentId::CoinTosses).is_none());
    }

    #[test]
    fn test_entropy_session() {
        let mut session = SimSession::from_entropy(SimConfig::default()).unwrap();
        let result = session.simulate_coin_tosses(50).unwrap();

        assert_eq!(result.heads + result.tails, 50);
        assert_eq!(session.seed(), 0);
    }
}
