//! Simulation of a single game of table tennis.
//!
//! A game is a run of independent points. Player one wins each point with a
//! fixed probability, and the game finishes as soon as somebody has at least
//! 11 points and leads by at least 2. There is no cap on the number of points
//! so a long deuce can go on for a while, but for any probability strictly
//! between 0 and 1 the game ends with probability one.
//!
//! Probabilities of exactly 0 or 1 are accepted. They are degenerate: every
//! game ends 0-11 or 11-0.
use rand::Rng;
use rand::distr::{Bernoulli, Distribution};
use tracing::trace;

use crate::core::{GameScore, GameStatus, Player};
use crate::errors::{Result, SimulationError};

/// Check that a per-point win probability is usable.
pub(crate) fn validate_probability(p1_prob: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p1_prob) {
        return Err(SimulationError::InvalidConfig(format!(
            "point win probability must be between 0 and 1, got {}",
            p1_prob
        )));
    }
    Ok(())
}

/// Plays games for a fixed per-point win probability.
///
/// The point distribution is built once so a match simulator can reuse the
/// engine for every game it plays.
#[derive(Debug, Clone, Copy)]
pub struct GameEngine {
    point_dist: Bernoulli,
}

impl GameEngine {
    /// Create an engine where player one wins each point with `p1_prob`.
    ///
    /// Returns `InvalidConfig` when the probability is NaN or outside
    /// `[0, 1]`.
    pub fn new(p1_prob: f64) -> Result<Self> {
        validate_probability(p1_prob)?;
        let point_dist = Bernoulli::new(p1_prob)
            .map_err(|e| SimulationError::InvalidConfig(e.to_string()))?;
        Ok(Self { point_dist })
    }

    /// Draw the winner of one point.
    pub fn play_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        if self.point_dist.sample(rng) {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Iterate over the score after every point until the game is over.
    ///
    /// The last item yielded is the finished score.
    pub fn points<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> GamePoints<'a, R> {
        GamePoints {
            engine: self,
            rng,
            score: GameScore::default(),
        }
    }

    /// Play a full game and return the winner along with the final score.
    pub fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> (Player, GameScore) {
        let mut score = GameScore::default();
        loop {
            let point_winner = self.play_point(rng);
            if let GameStatus::Won(winner) = score.record_point(point_winner) {
                trace!(%winner, %score, "Game finished");
                return (winner, score);
            }
        }
    }
}

/// Iterator over the running score of a game, see [`GameEngine::points`].
pub struct GamePoints<'a, R: Rng + ?Sized> {
    engine: &'a GameEngine,
    rng: &'a mut R,
    score: GameScore,
}

impl<R: Rng + ?Sized> Iterator for GamePoints<'_, R> {
    type Item = GameScore;

    fn next(&mut self) -> Option<Self::Item> {
        if self.score.status().is_finished() {
            return None;
        }
        let point_winner = self.engine.play_point(&mut *self.rng);
        self.score.record_point(point_winner);
        Some(self.score)
    }
}

/// Play a single game where player one wins each point with `p1_prob`.
///
/// Convenience wrapper around [`GameEngine`] for one-off games.
pub fn play_game<R: Rng + ?Sized>(p1_prob: f64, rng: &mut R) -> Result<(Player, GameScore)> {
    Ok(GameEngine::new(p1_prob)?.play(rng))
}
