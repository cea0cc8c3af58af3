//! JSON report of a session for machine consumption.
//!
//! Used by the CLI's `--json` mode; nothing is written to disk.

use crate::error::SimError;
use crate::experiments::ExperimentId;
use crate::presentation::Presentation;
use crate::results::ExperimentResult;
use crate::session::SimSession;
use probsim_env::RandomSource;
use serde::Serialize;

/// One experiment's entry in the report.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    /// Experiment key
    pub experiment: ExperimentId,

    /// Stored result, if the experiment has run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ExperimentResult>,

    /// Chart payload or not-run marker
    pub presentation: Presentation,
}

/// Complete session report.
#[derive(Debug, Clone, Serialize)]
pub struct SessionExport {
    /// Seed of the session's random source (0 = entropy)
    pub seed: u64,

    /// Requested experiments, in canonical order
    pub experiments: Vec<ExperimentReport>,
}

impl SessionExport {
    /// Builds a report covering `experiments` from the session's store.
    pub fn from_session<R: RandomSource>(
        session: &SimSession<R>,
        experiments: &[ExperimentId],
    ) -> Self {
        let experiments = experiments
            .iter()
            .map(|&experiment| ExperimentReport {
                experiment,
                result: session.result(experiment).cloned(),
                presentation: session.present(experiment),
            })
            .collect();

        Self {
            seed: session.seed(),
            experiments,
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
