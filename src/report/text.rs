use std::io::Write;

use crate::core::Player;
use crate::errors::ReportError;
use crate::simulation::{ScoreHistogram, SimulationResult};

use super::Reporter;

/// Widest bar drawn in a histogram, in characters.
const DEFAULT_BAR_WIDTH: usize = 40;

/// Plain text report: match win counts and rates, then a histogram of the
/// points each player scored per game and the spread of match lengths.
///
/// ```text
/// ===== Simulated 1000 matches (best of 5, player 1 wins 55.00% of points) =====
/// Player 1 wins: 819, win rate: 81.90%
/// Player 2 wins: 181, win rate: 18.10%
/// ```
pub struct TextReporter<W: Write> {
    writer: W,
    bar_width: usize,
    show_histograms: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bar_width: DEFAULT_BAR_WIDTH,
            show_histograms: true,
        }
    }

    /// Set the width of the longest histogram bar
    pub fn bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    /// Only print the win summary
    pub fn summary_only(mut self) -> Self {
        self.show_histograms = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_summary(&mut self, result: &SimulationResult) -> Result<(), ReportError> {
        let config = result.config();
        writeln!(
            self.writer,
            "===== Simulated {} matches (best of {}, player 1 wins {:.2}% of points) =====",
            result.num_matches(),
            config.best_of(),
            config.p1_point_win_prob() * 100.0
        )?;
        for player in Player::ALL {
            writeln!(
                self.writer,
                "{} wins: {}, win rate: {:.2}%",
                player,
                result.wins(player),
                result.win_rate(player) * 100.0
            )?;
        }
        Ok(())
    }

    fn write_histogram(&mut self, title: &str, hist: &ScoreHistogram) -> Result<(), ReportError> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} (games: {}, mean: {:.2})",
            title,
            hist.total(),
            hist.mean()
        )?;
        let largest = hist.counts().iter().copied().max().unwrap_or(0);
        let width = self.bar_width;
        for (points, &count) in hist.counts().iter().enumerate() {
            let bar = self.bar(count, largest);
            writeln!(self.writer, "{:>3} | {:<width$} {}", points, bar, count)?;
        }
        Ok(())
    }

    fn write_match_lengths(&mut self, lengths: &[usize]) -> Result<(), ReportError> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Match length")?;
        let largest = lengths.iter().copied().max().unwrap_or(0);
        let width = self.bar_width;
        for (games, &count) in lengths.iter().enumerate().filter(|(_, c)| **c > 0) {
            let bar = self.bar(count, largest);
            writeln!(self.writer, "{:>3} games | {:<width$} {}", games, bar, count)?;
        }
        Ok(())
    }

    fn bar(&self, count: usize, largest: usize) -> String {
        if largest == 0 {
            return String::new();
        }
        // Round up so any non-zero bin gets at least one mark.
        let len = (count * self.bar_width).div_ceil(largest);
        "#".repeat(len)
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, result: &SimulationResult) -> Result<(), ReportError> {
        self.write_summary(result)?;

        if self.show_histograms {
            let distribution = result.distribution();
            self.write_histogram("Player 1 points per game", &distribution.p1_points)?;
            self.write_histogram("Player 2 points per game", &distribution.p2_points)?;
            self.write_match_lengths(&distribution.match_lengths)?;
            writeln!(
                self.writer,
                "\nGames past 10-10: {} ({:.2}%)",
                distribution.deuce_games,
                distribution.deuce_rate() * 100.0
            )?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
