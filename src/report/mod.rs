//! Presenting finished simulations.
//!
//! The simulation never calls a reporter itself. Callers run a simulation,
//! get a [`SimulationResult`](crate::simulation::SimulationResult) back, and
//! hand it to whichever reporters they like. A reporter that fails can't
//! affect a result that has already been built.

use crate::errors::ReportError;
use crate::simulation::SimulationResult;

/// Module with the plain text summary and histogram reporter.
mod text;
/// Export `TextReporter`
pub use self::text::TextReporter;

/// Module with the JSON reporter.
#[cfg(feature = "serde")]
mod json;
/// Export `JsonReporter`
#[cfg(feature = "serde")]
pub use self::json::JsonReporter;

/// Something that renders a finished simulation.
pub trait Reporter {
    fn report(&mut self, result: &SimulationResult) -> Result<(), ReportError>;
}
