use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::event;

use crate::errors::Result;

use super::config::{MatchConfig, SimulationConfig, validate_num_matches};
use super::match_engine::MatchEngine;
use super::result::SimulationResult;

/// Simulate `n_times` independent matches and aggregate the outcomes.
///
/// Nothing is carried over between calls; the returned result is built from
/// scratch. `n_times` of zero is rejected before any match is played.
pub fn run_simulation<R: Rng + ?Sized>(
    config: &MatchConfig,
    n_times: usize,
    rng: &mut R,
) -> Result<SimulationResult> {
    validate_num_matches(n_times)?;
    let engine = MatchEngine::new(config)?;

    event!(
        tracing::Level::INFO,
        num_matches = n_times,
        p1_point_win_prob = config.p1_point_win_prob(),
        best_of = config.best_of(),
        "Starting match simulation"
    );

    let matches = (0..n_times).map(|_| engine.play(rng)).collect();
    let result = SimulationResult::from_matches(*config, matches);

    event!(
        tracing::Level::INFO,
        p1_win_rate = result.p1_win_rate(),
        p2_win_rate = result.p2_win_rate(),
        total_games = result.total_games(),
        "Completed match simulation"
    );

    Ok(result)
}

/// Runs a configured Monte Carlo simulation
///
/// Use [`super::SimulationBuilder`] to construct one.
#[derive(Debug, Clone)]
pub struct MatchSimulator {
    config: SimulationConfig,
}

impl MatchSimulator {
    /// Create a new MatchSimulator (internal - use SimulationBuilder instead)
    pub(crate) fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Get the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the simulation with an RNG seeded from the configuration.
    ///
    /// Without a configured seed a random one is drawn, so results differ
    /// between runs.
    pub fn run(&self) -> Result<SimulationResult> {
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        event!(tracing::Level::DEBUG, seed, "Seeding simulation RNG");
        let mut rng = StdRng::seed_from_u64(seed);
        self.run_with_rng(&mut rng)
    }

    /// Run the simulation drawing from a caller supplied RNG
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SimulationResult> {
        run_simulation(&self.config.match_config, self.config.num_matches, rng)
    }
}
