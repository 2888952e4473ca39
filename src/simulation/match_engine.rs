use rand::Rng;
use tracing::trace;

use crate::core::Player;
use crate::errors::Result;
use crate::game::GameEngine;

use super::config::MatchConfig;
use super::result::MatchOutcome;

/// Plays whole matches by chaining games from a [`GameEngine`].
///
/// Games are played until one player has `win_needed` of them. Each game
/// adds exactly one to a counter, so a match never lasts more than
/// `best_of` games.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine {
    game_engine: GameEngine,
    win_needed: u32,
}

impl MatchEngine {
    pub fn new(config: &MatchConfig) -> Result<Self> {
        Ok(Self {
            game_engine: GameEngine::new(config.p1_point_win_prob())?,
            win_needed: config.win_needed(),
        })
    }

    /// Play one match to completion.
    pub fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> MatchOutcome {
        let mut games_won = [0u32; 2];
        let mut games = Vec::new();

        while games_won.iter().all(|&won| won < self.win_needed) {
            let (game_winner, score) = self.game_engine.play(rng);
            games.push(score);
            games_won[game_winner.index()] += 1;
        }

        // Exactly one counter reached win_needed when the loop exited.
        let winner = if games_won[0] == self.win_needed {
            Player::One
        } else {
            Player::Two
        };

        trace!(
            %winner,
            p1_games = games_won[0],
            p2_games = games_won[1],
            "Match finished"
        );

        MatchOutcome::new(winner, games)
    }
}

/// Play a single match under the given rules.
pub fn play_match<R: Rng + ?Sized>(config: &MatchConfig, rng: &mut R) -> Result<MatchOutcome> {
    Ok(MatchEngine::new(config)?.play(rng))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::GameScore;

    #[test]
    fn test_best_of_five_lengths_and_counts() {
        let config = MatchConfig::new(0.5, 5).unwrap();
        let engine = MatchEngine::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..1_000 {
            let outcome = engine.play(&mut rng);
            let winner = outcome.winner();
            assert!((3..=5).contains(&outcome.num_games()));
            assert_eq!(outcome.games_won(winner), 3);
            assert!(outcome.games_won(winner.opponent()) < 3);
            // The deciding game must go to the match winner.
            assert_eq!(outcome.games().last().unwrap().winner(), Some(winner));
        }
    }

    #[test]
    fn test_match_lengths_for_other_formats() {
        let mut rng = StdRng::seed_from_u64(77);
        for best_of in [1, 3, 7, 9] {
            let config = MatchConfig::new(0.5, best_of).unwrap();
            for _ in 0..200 {
                let outcome = play_match(&config, &mut rng).unwrap();
                let needed = config.win_needed() as usize;
                assert!(outcome.num_games() >= needed);
                assert!(outcome.num_games() <= best_of as usize);
                assert_eq!(outcome.games_won(outcome.winner()), config.win_needed());
            }
        }
    }

    #[test]
    fn test_certain_winner_sweeps() {
        let config = MatchConfig::new(1.0, 7).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = play_match(&config, &mut rng).unwrap();

        assert_eq!(outcome.winner(), Player::One);
        assert_eq!(outcome.games(), &[GameScore::new(11, 0); 4]);
        assert_eq!(outcome.scoreline(), (4, 0));
    }

    #[test]
    fn test_certain_loser_is_swept() {
        let config = MatchConfig::new(0.0, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = play_match(&config, &mut rng).unwrap();

        assert_eq!(outcome.winner(), Player::Two);
        assert_eq!(outcome.scoreline(), (0, 3));
    }

    #[test]
    fn test_single_match_at_55_percent() {
        let config = MatchConfig::new(0.55, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(55);
        let outcome = play_match(&config, &mut rng).unwrap();
        assert!((3..=5).contains(&outcome.num_games()));
    }
}
