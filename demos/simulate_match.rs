extern crate tt_sim;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tt_sim::report::{JsonReporter, Reporter, TextReporter};
use tt_sim::simulation::SimulationBuilder;

#[derive(Parser, Debug)]
#[command(
    name = "simulate_match",
    about = "Simulate best-of-N table tennis matches",
    long_about = "Run a Monte Carlo simulation of table tennis matches where player 1 wins\n\
                  each point with a fixed probability, then print match win rates and\n\
                  the distribution of points per game."
)]
struct Args {
    /// Log simulation events to stderr (-v debug, -vv per match and game)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Only log warnings
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Probability that player 1 wins any single point (0.0 - 1.0)
    #[arg(short = 'p', long = "p1-win-prob", default_value_t = 0.55)]
    p1_win_prob: f64,

    /// Maximum number of games in a match (odd)
    #[arg(short = 'b', long = "best-of", default_value_t = 5)]
    best_of: u32,

    /// Number of matches to simulate
    #[arg(short = 'n', long = "num-matches", default_value_t = 10_000)]
    num_matches: usize,

    /// Optional random seed for reproducibility
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Print the full result as JSON instead of the text report
    #[arg(long = "json")]
    json: bool,

    /// Only print win counts and rates
    #[arg(long = "summary-only")]
    summary_only: bool,
}

/// Log to stderr so stdout only carries the report. `RUST_LOG` overrides the
/// flags.
fn init_tracing(args: &Args) {
    let level = match (args.quiet, args.verbosity) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,tt_sim={level}")));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    let mut builder = SimulationBuilder::new()
        .p1_point_win_prob(args.p1_win_prob)
        .best_of(args.best_of)
        .num_matches(args.num_matches);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let simulator = match builder.build() {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let result = match simulator.run() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout().lock();
    let report = if args.json {
        JsonReporter::new(stdout).report(&result)
    } else if args.summary_only {
        TextReporter::new(stdout).summary_only().report(&result)
    } else {
        TextReporter::new(stdout).report(&result)
    };

    if let Err(e) = report {
        eprintln!("Failed to write report: {}", e);
        std::process::exit(1);
    }
}
