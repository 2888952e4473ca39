use crate::errors::{Result, SimulationError};
use crate::game::validate_probability;

/// Rules for a single match: how likely player one is to win a point, and
/// how many games the match can go to.
///
/// The fields are private so a `MatchConfig` can only exist in a valid state.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatchConfig"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    p1_point_win_prob: f64,
    best_of: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            p1_point_win_prob: 0.5,
            best_of: 5,
        }
    }
}

impl MatchConfig {
    /// Create a validated match configuration.
    ///
    /// `best_of` must be odd, which also rules out zero. The probability must
    /// lie in `[0, 1]`; the two endpoints are allowed but give degenerate
    /// results.
    pub fn new(p1_point_win_prob: f64, best_of: u32) -> Result<Self> {
        validate_probability(p1_point_win_prob)?;

        if best_of % 2 == 0 {
            return Err(SimulationError::InvalidConfig(format!(
                "best_of must be a positive odd number, got {}",
                best_of
            )));
        }

        Ok(Self {
            p1_point_win_prob,
            best_of,
        })
    }

    /// Probability that player one wins a single point
    pub fn p1_point_win_prob(&self) -> f64 {
        self.p1_point_win_prob
    }

    /// Probability that player two wins a single point
    pub fn p2_point_win_prob(&self) -> f64 {
        1.0 - self.p1_point_win_prob
    }

    /// Maximum number of games in a match
    pub fn best_of(&self) -> u32 {
        self.best_of
    }

    /// Games a player must win to take the match
    pub fn win_needed(&self) -> u32 {
        self.best_of / 2 + 1
    }
}

/// Unchecked wire form of `MatchConfig`, validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatchConfig {
    p1_point_win_prob: f64,
    best_of: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatchConfig> for MatchConfig {
    type Error = SimulationError;

    fn try_from(raw: RawMatchConfig) -> Result<Self> {
        MatchConfig::new(raw.p1_point_win_prob, raw.best_of)
    }
}

/// Configuration for a full Monte Carlo run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Rules each simulated match is played under
    pub match_config: MatchConfig,
    /// Number of independent matches to simulate
    pub num_matches: usize,
    /// Optional random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            num_matches: 10_000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Validate the simulation configuration
    pub fn validate(&self) -> Result<()> {
        validate_num_matches(self.num_matches)
    }
}

pub(crate) fn validate_num_matches(num_matches: usize) -> Result<()> {
    if num_matches == 0 {
        return Err(SimulationError::InvalidConfig(
            "number of matches must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
