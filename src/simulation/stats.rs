use crate::core::Player;

use super::result::MatchOutcome;

/// Counts of games by the number of points one player scored in them.
///
/// Bin `i` holds the number of games the player finished with exactly `i`
/// points. Bins run from 0 to the highest score seen, inclusive.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreHistogram {
    counts: Vec<usize>,
}

impl ScoreHistogram {
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut counts: Vec<usize> = Vec::new();
        for p in points {
            let bin = p as usize;
            if bin >= counts.len() {
                counts.resize(bin + 1, 0);
            }
            counts[bin] += 1;
        }
        Self { counts }
    }

    /// Number of games that ended with exactly `points` for this player
    pub fn count(&self, points: u32) -> usize {
        self.counts.get(points as usize).copied().unwrap_or(0)
    }

    /// All bins, indexed by points scored
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Highest point total seen, or `None` for an empty histogram
    pub fn max_points(&self) -> Option<u32> {
        self.counts.len().checked_sub(1).map(|max| max as u32)
    }

    /// Number of games counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Average points per game, 0.0 for an empty histogram
    pub fn mean(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let sum: usize = self
            .counts
            .iter()
            .enumerate()
            .map(|(points, count)| points * count)
            .sum();
        sum as f64 / total as f64
    }

    /// The most common point total. Ties go to the lower score.
    pub fn mode(&self) -> Option<u32> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
            .map(|(points, _)| points as u32)
    }
}

/// Distribution data a reporter needs to draw charts of a run
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreDistribution {
    /// Points per game for player one
    pub p1_points: ScoreHistogram,
    /// Points per game for player two
    pub p2_points: ScoreHistogram,
    /// Index `n` is the number of matches that lasted `n` games
    pub match_lengths: Vec<usize>,
    /// Games that went beyond 10-10
    pub deuce_games: usize,
    /// Total number of games across all matches
    pub total_games: usize,
}

impl ScoreDistribution {
    /// Tally the given matches. `match_lengths` runs up to the longest
    /// match seen.
    pub fn from_matches(matches: &[MatchOutcome]) -> Self {
        let games = || matches.iter().flat_map(|outcome| outcome.games().iter());

        let mut match_lengths = Vec::new();
        for outcome in matches {
            let len = outcome.num_games();
            if len >= match_lengths.len() {
                match_lengths.resize(len + 1, 0);
            }
            match_lengths[len] += 1;
        }

        Self {
            p1_points: ScoreHistogram::from_points(games().map(|g| g.points(Player::One))),
            p2_points: ScoreHistogram::from_points(games().map(|g| g.points(Player::Two))),
            match_lengths,
            deuce_games: games().filter(|g| g.went_to_deuce()).count(),
            total_games: games().count(),
        }
    }

    /// Histogram for the given player
    pub fn points(&self, player: Player) -> &ScoreHistogram {
        match player {
            Player::One => &self.p1_points,
            Player::Two => &self.p2_points,
        }
    }

    /// Fraction of games that went to deuce
    pub fn deuce_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.deuce_games as f64 / self.total_games as f64
        }
    }
}
