//! Monte Carlo simulation of table tennis matches.
//!
//! Given the probability that player one wins any single point, this crate
//! plays games under the official 11 point, win by 2 rule, strings them
//! together into best-of-N matches and repeats that many times to estimate
//! match win rates and the distribution of game scores.
//!
//! - [`core`] holds the basic types: [`core::Player`] and [`core::GameScore`].
//! - [`game`] plays a single game.
//! - [`simulation`] plays matches and aggregates many of them into a
//!   [`simulation::SimulationResult`].
//! - [`report`] renders a finished result as text or JSON.
//!
//! # Example
//!
//! ```
//! use tt_sim::report::{Reporter, TextReporter};
//! use tt_sim::simulation::SimulationBuilder;
//!
//! let simulator = SimulationBuilder::new()
//!     .p1_point_win_prob(0.55)
//!     .best_of(5)
//!     .num_matches(500)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let result = simulator.run().unwrap();
//!
//! let mut reporter = TextReporter::new(Vec::new()).summary_only();
//! reporter.report(&result).unwrap();
//! ```

/// Players, scores and the game ending rule.
pub mod core;

/// Errors returned by simulations and reporters.
pub mod errors;

/// Single game simulation.
pub mod game;

/// Match simulation and aggregate statistics.
pub mod simulation;

/// Rendering finished simulations.
pub mod report;
