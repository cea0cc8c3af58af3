//! Probability Simulator CLI
//!
//! Run coin, die, card and compound-event experiments and chart the results.

use clap::Parser;
use probsim_env::RandomSource;
use probsim_sim::experiments::{DEFAULT_DRAWS, DEFAULT_ROLLS, DEFAULT_TOSSES, DEFAULT_TRIALS};
use probsim_sim::{
    ChartSink, ExperimentId, SessionExport, SimConfig, SimError, SimSession, TerminalChart,
};
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Probability experiment simulator
#[derive(Parser, Debug)]
#[command(name = "probsim")]
#[command(about = "Simulate probability experiments and chart outcome frequencies", long_about = None)]
struct Args {
    /// Seed for reproducible runs (0 = random from OS entropy)
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Experiment to run (coin_tosses, die_rolls, card_draws, compound_events, all)
    #[arg(short, long, default_value = "all")]
    experiment: String,

    /// Number of coin tosses
    #[arg(long, default_value_t = DEFAULT_TOSSES)]
    tosses: usize,

    /// Number of die rolls
    #[arg(long, default_value_t = DEFAULT_ROLLS)]
    rolls: usize,

    /// Number of cards drawn without replacement (at most 52)
    #[arg(long, default_value_t = DEFAULT_DRAWS)]
    draws: usize,

    /// Number of two-coin trials
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output instead of text charts
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            num_tosses: self.tosses,
            num_rolls: self.rolls,
            num_draws: self.draws,
            num_trials: self.trials,
        }
    }

    fn experiments(&self) -> Result<Vec<ExperimentId>, SimError> {
        if self.experiment == "all" {
            Ok(ExperimentId::all())
        } else {
            Ok(vec![self.experiment.parse()?])
        }
    }
}

/// Runs the requested experiments and reports them.
fn execute<R: RandomSource>(
    mut session: SimSession<R>,
    experiments: &[ExperimentId],
    json: bool,
) -> Result<(), SimError> {
    debug!("session seed={} config={:?}", session.seed(), session.config());

    if json {
        for experiment in experiments {
            session.run(*experiment)?;
        }
        let export = SessionExport::from_session(&session, experiments);
        println!("{}", export.to_json()?);
        return Ok(());
    }

    let mut sink = TerminalChart::stdout();
    if experiments.len() == ExperimentId::all().len() {
        return session.run_all(&mut sink);
    }
    for experiment in experiments {
        info!("Running {} simulation...", experiment.noun());
        session.run(*experiment)?;
        sink.show(&session.present(*experiment))?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), SimError> {
    let experiments = args.experiments()?;
    let config = args.config();

    if config.seed == 0 {
        execute(SimSession::from_entropy(config)?, &experiments, args.json)
    } else {
        info!("Seed: {}", config.seed);
        execute(SimSession::seeded(config)?, &experiments, args.json)
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if let Err(e) = run(&args) {
        error!("{}", e);
        if matches!(e, SimError::UnknownExperiment(_)) {
            eprintln!("Available experiments: coin_tosses, die_rolls, card_draws, compound_events, all");
        }
        std::process::exit(1);
    }
}
