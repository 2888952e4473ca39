use std::io::Write;

use crate::errors::ReportError;
use crate::simulation::SimulationResult;

use super::Reporter;

/// Writes the whole result, match history included, as pretty printed JSON.
pub struct JsonReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, result: &SimulationResult) -> Result<(), ReportError> {
        let json = serde_json::to_vec_pretty(result)?;
        self.writer.write_all(&json)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
