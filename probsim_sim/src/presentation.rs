//! Chart payloads derived from experiment results.
//!
//! Presentation is a pure function of a result (or its absence). It computes
//! labels, counts and probability figures; drawing them is the job of a
//! [`ChartSink`].

use crate::error::SimError;
use crate::experiments::ExperimentId;
use crate::results::ExperimentResult;
use crate::runner::DIE_FACES;
use serde::Serialize;

/// Y-axis label shared by every panel.
const FREQUENCY: &str = "Frequency";

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: usize,

    /// Colour hint for the renderer
    pub color: &'static str,
}

impl Bar {
    fn new(label: impl Into<String>, count: usize, color: &'static str) -> Self {
        Self {
            label: label.into(),
            count,
            color,
        }
    }
}

/// A single bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,

    pub y_label: String,
    pub bars: Vec<Bar>,
}

impl ChartPanel {
    fn new(title: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            title: title.into(),
            x_label: None,
            y_label: FREQUENCY.to_string(),
            bars,
        }
    }

    /// Sum of all bar counts.
    pub fn total(&self) -> usize {
        self.bars.iter().map(|bar| bar.count).sum()
    }
}

/// A derived figure printed beneath a chart.
///
/// `value` is `None` when the figure is undefined (zero denominator).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub label: String,
    pub value: Option<f64>,
}

impl Annotation {
    fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}: {:.2}", self.label, value),
            None => write!(f, "{}: undefined", self.label),
        }
    }
}

/// Everything a renderer needs to draw one experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub experiment: ExperimentId,
    pub title: String,
    pub panels: Vec<ChartPanel>,
    pub annotations: Vec<Annotation>,
}

impl ChartPayload {
    /// Annotations joined into a single caption line.
    pub fn caption(&self) -> String {
        self.annotations
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// What to show for an experiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Presentation {
    /// No result exists yet; nothing to draw
    NotRun { experiment: ExperimentId },

    /// A chart ready for rendering
    Chart(ChartPayload),
}

impl Presentation {
    /// Returns the experiment this presentation is for.
    pub fn experiment(&self) -> ExperimentId {
        match self {
            Presentation::NotRun { experiment } => *experiment,
            Presentation::Chart(chart) => chart.experiment,
        }
    }

    /// Returns the chart, if there is one.
    pub fn chart(&self) -> Option<&ChartPayload> {
        match self {
            Presentation::NotRun { .. } => None,
            Presentation::Chart(chart) => Some(chart),
        }
    }
}

/// Rendering collaborator receiving presentations.
pub trait ChartSink {
    /// Displays a chart, or reports that there is nothing to show.
    fn show(&mut self, presentation: &Presentation) -> Result<(), SimError>;
}

/// Returns `numerator / denominator`, or `None` when the denominator is zero.
pub fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

/// Builds the presentation for `experiment` from its stored result.
///
/// A result belonging to a different experiment counts as absent.
pub fn present(experiment: ExperimentId, result: Option<&ExperimentResult>) -> Presentation {
    match result {
        Some(result) if result.id() == experiment => Presentation::Chart(chart(result)),
        _ => Presentation::NotRun { experiment },
    }
}

/// Builds the chart payload for a result.
pub fn chart(result: &ExperimentResult) -> ChartPayload {
    match result {
        ExperimentResult::CoinTosses(r) => {
            let total = r.heads + r.tails;
            ChartPayload {
                experiment: ExperimentId::CoinTosses,
                title: format!("Results of {} Coin Tosses", total),
                panels: vec![ChartPanel::new(
                    "Coin Tosses",
                    vec![
                        Bar::new("Heads", r.heads, "green"),
                        Bar::new("Tails", r.tails, "blue"),
                    ],
                )],
                annotations: vec![Annotation::new("Probability of Heads", ratio(r.heads, total))],
            }
        }
        ExperimentResult::DieRolls(r) => {
            let bars: Vec<Bar> = r
                .counts
                .iter()
                .map(|(face, count)| Bar::new(face.to_string(), *count, "purple"))
                .collect();
            let mut panel = ChartPanel::new("Die Rolls", bars);
            panel.x_label = Some("Die Face".to_string());
            let total = panel.total();

            ChartPayload {
                experiment: ExperimentId::DieRolls,
                title: "Results of Die Rolls".to_string(),
                panels: vec![panel],
                annotations: vec![Annotation::new(
                    "Expected frequency for each face",
                    Some(total as f64 / DIE_FACES as f64),
                )],
            }
        }
        ExperimentResult::CardDraws(r) => {
            let total = r.red + r.black;
            ChartPayload {
                experiment: ExperimentId::CardDraws,
                title: format!("Results of {} Card Draws", total),
                panels: vec![ChartPanel::new(
                    "Card Draws",
                    vec![
                        Bar::new("Red Cards", r.red, "red"),
                        Bar::new("Black Cards", r.black, "black"),
                    ],
                )],
                annotations: vec![Annotation::new("Probability of Red Card", ratio(r.red, total))],
            }
        }
        ExperimentResult::CompoundEvents(r) => {
            let not_both = r.at_least_one_head - r.both_heads + r.neither_head;
            let total = r.both_heads + not_both;
            ChartPayload {
                experiment: ExperimentId::CompoundEvents,
                title: format!("Results of {} Two-Coin Trials", total),
                panels: vec![
                    ChartPanel::new(
                        "Both Heads vs. Not Both Heads",
                        vec![
                            Bar::new("Both Heads", r.both_heads, "gold"),
                            Bar::new("Not Both Heads", not_both, "silver"),
                        ],
                    ),
                    ChartPanel::new(
                        "At Least One Head vs. No Heads",
                        vec![
                            Bar::new("At Least One Head", r.at_least_one_head, "gold"),
                            Bar::new("No Heads", r.neither_head, "silver"),
                        ],
                    ),
                ],
                annotations: vec![
                    Annotation::new("P(Both Heads)", ratio(r.both_heads, total)),
                    Annotation::new("P(At Least One Head)", ratio(r.at_least_one_head, total)),
                ],
            }
        }
    }
}
