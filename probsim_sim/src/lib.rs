//! Probability Experiment Simulator
//!
//! Runs classic probability experiments (coin tosses, die rolls, card
//! draws, two-coin compound events), tallies outcome frequencies, and
//! derives chart payloads showing empirical probabilities.
//!
//! # Core Principle: Injected Randomness
//!
//! Experiments never touch a global RNG. A [`SimSession`] owns a
//! [`RandomSource`](probsim_env::RandomSource); seed it with
//! [`SeededSource`] and every run is reproducible from its seed.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     SimSession                       │
//! │  RandomSource ──► runner::{toss_coins, roll_die,     │
//! │                    draw_cards, flip_coin_pairs}      │
//! │                          │                           │
//! │                          ▼                           │
//! │          results: ExperimentId → ExperimentResult    │
//! └──────────────────────────┬───────────────────────────┘
//!                            │ presentation::present()
//!                            ▼
//!              Presentation ──► ChartSink (TerminalChart)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use probsim_sim::{SimSession, SimConfig, TerminalChart};
//!
//! let mut session = SimSession::seeded(SimConfig::default().with_seed(42))?;
//! let coins = session.simulate_coin_tosses(100)?;
//! assert_eq!(coins.heads + coins.tails, 100);
//!
//! session.run_all(&mut TerminalChart::stdout())?;
//! ```

mod context;
mod error;
mod exporter;
mod results;
mod session;
mod visualizer;
pub mod experiments;
pub mod presentation;
pub mod runner;

pub use context::SeededSource;
pub use error::SimError;
pub use exporter::{ExperimentReport, SessionExport};
pub use experiments::ExperimentId;
pub use presentation::{Annotation, Bar, ChartPanel, ChartPayload, ChartSink, Presentation};
pub use results::{
    CardDrawResult, CoinTossResult, CompoundEventResult, DieRollResult, ExperimentResult,
};
pub use session::{SimConfig, SimSession};
pub use visualizer::TerminalChart;
