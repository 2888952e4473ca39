use crate::errors::Result;

use super::config::{MatchConfig, SimulationConfig};
use super::runner::MatchSimulator;

/// Builder for constructing MatchSimulator instances
///
/// # Example
///
/// ```
/// use tt_sim::simulation::SimulationBuilder;
///
/// let simulator = SimulationBuilder::new()
///     .p1_point_win_prob(0.55)
///     .best_of(5)
///     .num_matches(1_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let result = simulator.run().unwrap();
/// assert_eq!(result.num_matches(), 1_000);
/// ```
#[derive(Debug, Default)]
pub struct SimulationBuilder {
    p1_point_win_prob: Option<f64>,
    best_of: Option<u32>,
    num_matches: Option<usize>,
    seed: Option<u64>,
}

impl SimulationBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probability that player one wins a single point
    pub fn p1_point_win_prob(mut self, p1_point_win_prob: f64) -> Self {
        self.p1_point_win_prob = Some(p1_point_win_prob);
        self
    }

    /// Set the maximum number of games per match
    pub fn best_of(mut self, best_of: u32) -> Self {
        self.best_of = Some(best_of);
        self
    }

    /// Set the number of matches to simulate
    pub fn num_matches(mut self, num_matches: usize) -> Self {
        self.num_matches = Some(num_matches);
        self
    }

    /// Set the random seed for reproducibility
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the MatchSimulator
    ///
    /// Returns an `InvalidConfig` error if any setting is out of range.
    pub fn build(self) -> Result<MatchSimulator> {
        let defaults = SimulationConfig::default();
        let default_match = defaults.match_config;

        let match_config = MatchConfig::new(
            self.p1_point_win_prob
                .unwrap_or(default_match.p1_point_win_prob()),
            self.best_of.unwrap_or(default_match.best_of()),
        )?;

        let config = SimulationConfig {
            match_config,
            num_matches: self.num_matches.unwrap_or(defaults.num_matches),
            seed: self.seed,
        };
        config.validate()?;

        Ok(MatchSimulator::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;

    #[test]
    fn test_builder_defaults() {
        let simulator = SimulationBuilder::new().build().unwrap();
        let config = simulator.config();

        assert_eq!(config.match_config.p1_point_win_prob(), 0.5);
        assert_eq!(config.match_config.best_of(), 5);
        assert_eq!(config.num_matches, 10_000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_custom_config() {
        let simulator = SimulationBuilder::new()
            .p1_point_win_prob(0.6)
            .best_of(7)
            .num_matches(250)
            .seed(42)
            .build()
            .unwrap();

        let config = simulator.config();
        assert_eq!(config.match_config.p1_point_win_prob(), 0.6);
        assert_eq!(config.match_config.best_of(), 7);
        assert_eq!(config.match_config.win_needed(), 4);
        assert_eq!(config.num_matches, 250);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_builder_validation_errors() {
        let cases = [
            SimulationBuilder::new().p1_point_win_prob(1.5),
            SimulationBuilder::new().p1_point_win_prob(-0.5),
            SimulationBuilder::new().best_of(4),
            SimulationBuilder::new().best_of(0),
            SimulationBuilder::new().num_matches(0),
        ];

        for builder in cases {
            assert!(matches!(
                builder.build().unwrap_err(),
                SimulationError::InvalidConfig(_)
            ));
        }
    }
}
