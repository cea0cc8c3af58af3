//! Terminal bar charts for experiment results.
//!
//! Renders each [`ChartPayload`] as horizontal text bars with count labels,
//! followed by its probability caption.
//!
//! ```text
//! Results of 100 Coin Tosses
//!   Coin Tosses (Frequency)
//!     Heads | ██████████████████████████████████████   53
//!     Tails | █████████████████████████████████        47
//!   Probability of Heads: 0.53
//! ```

use crate::error::SimError;
use crate::presentation::{ChartPanel, ChartPayload, ChartSink, Presentation};
use std::io::{self, Write};

/// Default width of the longest bar, in characters.
const DEFAULT_BAR_WIDTH: usize = 40;

/// Text renderer writing charts to any `Write` target.
pub struct TerminalChart<W: Write> {
    out: W,

    /// Width of the longest bar
    bar_width: usize,
}

impl TerminalChart<io::Stdout> {
    /// Creates a renderer that writes to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalChart<W> {
    /// Creates a renderer over the given writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Sets the width of the longest bar.
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_panel(&mut self, panel: &ChartPanel) -> io::Result<()> {
        match &panel.x_label {
            Some(x_label) => writeln!(self.out, "  {} ({} by {})", panel.title, panel.y_label, x_label)?,
            None => writeln!(self.out, "  {} ({})", panel.title, panel.y_label)?,
        }

        let label_width = panel.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
        let max_count = panel.bars.iter().map(|b| b.count).max().unwrap_or(0);

        for bar in &panel.bars {
            // Empty panels draw no bars rather than dividing by zero
            let len = if max_count == 0 {
                0
            } else {
                bar.count * self.bar_width / max_count
            };
            writeln!(
                self.out,
                "    {:>lw$} | {:<bw$} {}",
                bar.label,
                "█".repeat(len),
                bar.count,
                lw = label_width,
                bw = self.bar_width,
            )?;
        }
        Ok(())
    }

    fn render(&mut self, chart: &ChartPayload) -> io::Result<()> {
        writeln!(self.out, "{}", chart.title)?;
        for panel in &chart.panels {
            self.render_panel(panel)?;
        }
        for annotation in &chart.annotations {
            writeln!(self.out, "  {}", annotation)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> ChartSink for TerminalChart<W> {
    fn show(&mut self, presentation: &Presentation) -> Result<(), SimError> {
        match presentation {
            Presentation::NotRun { experiment } => {
                writeln!(self.out, "{}", experiment.not_run_message())?;
            }
            Presentation::Chart(chart) => self.render(chart)?,
        }
        Ok(())
    }
}
