//! Match simulation and aggregation
//!
//! A match is a sequence of games played until one side has won
//! `best_of / 2 + 1` of them. This module plays single matches and runs many
//! independent matches to estimate how often each player wins, keeping every
//! game score so the distribution of points can be examined afterwards.
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use tt_sim::core::Player;
//! use tt_sim::simulation::{MatchConfig, run_simulation};
//!
//! let config = MatchConfig::new(0.55, 5).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = run_simulation(&config, 2_000, &mut rng).unwrap();
//!
//! assert!(result.win_rate(Player::One) > result.win_rate(Player::Two));
//! let distribution = result.distribution();
//! assert_eq!(distribution.total_games, result.total_games());
//! ```

mod builder;
mod config;
mod match_engine;
mod result;
mod runner;
mod stats;

pub use builder::SimulationBuilder;
pub use config::{MatchConfig, SimulationConfig};
pub use match_engine::{MatchEngine, play_match};
pub use result::{MatchOutcome, SimulationResult};
pub use runner::{MatchSimulator, run_simulation};
pub use stats::{ScoreDistribution, ScoreHistogram};
