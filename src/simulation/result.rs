use crate::core::{GameScore, Player};
use crate::errors::{Result, SimulationError};

use super::config::MatchConfig;
use super::stats::ScoreDistribution;

/// The record of one simulated match
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatchOutcome"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    winner: Player,
    games: Vec<GameScore>,
}

impl MatchOutcome {
    /// Create an outcome from the match winner and the games in play order
    pub(crate) fn new(winner: Player, games: Vec<GameScore>) -> Self {
        Self { winner, games }
    }

    /// Check the outcome is one a real match could produce: every game
    /// finished, the last game won by the match winner, and the winner ahead
    /// on games.
    fn check(&self) -> Result<()> {
        if self.games.iter().any(|g| !g.status().is_finished()) {
            return Err(SimulationError::InvalidResult(
                "match contains an unfinished game".to_string(),
            ));
        }
        let last_winner = self.games.last().and_then(GameScore::winner);
        if last_winner != Some(self.winner) {
            return Err(SimulationError::InvalidResult(format!(
                "{} is recorded as the match winner but did not win the last game",
                self.winner
            )));
        }
        if self.games_won(self.winner) <= self.games_won(self.winner.opponent()) {
            return Err(SimulationError::InvalidResult(format!(
                "{} is recorded as the match winner but did not win more games",
                self.winner
            )));
        }
        Ok(())
    }

    /// Check the outcome ends exactly when the winner reaches `win_needed`.
    pub(crate) fn check_format(&self, win_needed: u32) -> Result<()> {
        self.check()?;
        let (won, lost) = (
            self.games_won(self.winner),
            self.games_won(self.winner.opponent()),
        );
        if won != win_needed || lost >= win_needed {
            return Err(SimulationError::InvalidResult(format!(
                "scoreline {}-{} does not finish a match needing {} games",
                won, lost, win_needed
            )));
        }
        Ok(())
    }

    /// The player who won the match
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Final score of every game, in the order they were played
    pub fn games(&self) -> &[GameScore] {
        &self.games
    }

    pub fn num_games(&self) -> usize {
        self.games.len()
    }

    /// Number of games the given player won in this match
    pub fn games_won(&self, player: Player) -> u32 {
        self.games
            .iter()
            .filter(|score| score.winner() == Some(player))
            .count() as u32
    }

    /// Games won as `(player one, player two)`, e.g. `(3, 1)`
    pub fn scoreline(&self) -> (u32, u32) {
        (self.games_won(Player::One), self.games_won(Player::Two))
    }
}

/// Unchecked wire form of `MatchOutcome`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatchOutcome {
    winner: Player,
    games: Vec<GameScore>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatchOutcome> for MatchOutcome {
    type Error = SimulationError;

    fn try_from(raw: RawMatchOutcome) -> Result<Self> {
        let outcome = MatchOutcome::new(raw.winner, raw.games);
        outcome.check()?;
        Ok(outcome)
    }
}

/// Aggregate results of a Monte Carlo run
///
/// Built fresh by every run and never modified afterwards. Reporters read it
/// through the accessors below.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSimulationResult"))]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// The rules every match was played under
    config: MatchConfig,
    /// Fraction of matches won by player one
    p1_win_rate: f64,
    /// Fraction of matches won by player two
    p2_win_rate: f64,
    /// Every simulated match, in the order it was played
    matches: Vec<MatchOutcome>,
}

/// Wire form of `SimulationResult`. Stored win rates are ignored and
/// recomputed from the match history.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSimulationResult {
    config: MatchConfig,
    matches: Vec<MatchOutcome>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSimulationResult> for SimulationResult {
    type Error = SimulationError;

    fn try_from(raw: RawSimulationResult) -> Result<Self> {
        if raw.matches.is_empty() {
            return Err(SimulationError::InvalidResult(
                "a result must hold at least one match".to_string(),
            ));
        }
        let win_needed = raw.config.win_needed();
        for outcome in &raw.matches {
            outcome.check_format(win_needed)?;
        }
        Ok(SimulationResult::from_matches(raw.config, raw.matches))
    }
}

impl SimulationResult {
    /// Build a result from the match history.
    ///
    /// `matches` must not be empty; the runner guarantees that by rejecting a
    /// zero match count up front.
    pub(crate) fn from_matches(config: MatchConfig, matches: Vec<MatchOutcome>) -> Self {
        let p1_wins = matches
            .iter()
            .filter(|outcome| outcome.winner() == Player::One)
            .count();
        let p1_win_rate = p1_wins as f64 / matches.len() as f64;

        Self {
            config,
            p1_win_rate,
            p2_win_rate: 1.0 - p1_win_rate,
            matches,
        }
    }

    /// Get the match rules used
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn p1_win_rate(&self) -> f64 {
        self.p1_win_rate
    }

    pub fn p2_win_rate(&self) -> f64 {
        self.p2_win_rate
    }

    /// Match win rate of the given player
    pub fn win_rate(&self, player: Player) -> f64 {
        match player {
            Player::One => self.p1_win_rate,
            Player::Two => self.p2_win_rate,
        }
    }

    /// Number of matches the given player won
    pub fn wins(&self, player: Player) -> usize {
        self.matches
            .iter()
            .filter(|outcome| outcome.winner() == player)
            .count()
    }

    pub fn num_matches(&self) -> usize {
        self.matches.len()
    }

    /// Every match outcome in simulation order
    pub fn matches(&self) -> &[MatchOutcome] {
        &self.matches
    }

    /// Every game of every match, flattened in play order
    pub fn game_scores(&self) -> impl Iterator<Item = &GameScore> + '_ {
        self.matches.iter().flat_map(|outcome| outcome.games().iter())
    }

    /// Total number of games played across all matches
    pub fn total_games(&self) -> usize {
        self.matches.iter().map(MatchOutcome::num_games).sum()
    }

    /// Points the given player scored in each game, flattened in play order
    pub fn points(&self, player: Player) -> Vec<u32> {
        self.game_scores().map(|score| score.points(player)).collect()
    }

    /// Histograms and tallies derived from the match history
    pub fn distribution(&self) -> ScoreDistribution {
        ScoreDistribution::from_matches(&self.matches)
    }

    /// Serialize the full result to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(winner: Player, games: &[(u32, u32)]) -> MatchOutcome {
        MatchOutcome::new(
            winner,
            games.iter().map(|&(p1, p2)| GameScore::new(p1, p2)).collect(),
        )
    }

    fn sample_result() -> SimulationResult {
        SimulationResult::from_matches(
            MatchConfig::default(),
            vec![
                outcome(Player::One, &[(11, 5), (11, 9), (11, 3)]),
                outcome(Player::Two, &[(11, 7), (9, 11), (8, 11), (12, 14)]),
                outcome(Player::One, &[(11, 0), (4, 11), (11, 8), (7, 11), (13, 11)]),
                outcome(Player::One, &[(11, 2), (11, 4), (11, 6)]),
            ],
        )
    }

    #[test]
    fn test_outcome_scoreline() {
        let outcome = outcome(Player::Two, &[(11, 7), (9, 11), (8, 11), (12, 14)]);
        assert_eq!(outcome.num_games(), 4);
        assert_eq!(outcome.games_won(Player::One), 1);
        assert_eq!(outcome.games_won(Player::Two), 3);
        assert_eq!(outcome.scoreline(), (1, 3));
    }

    #[test]
    fn test_win_rates() {
        let result = sample_result();
        assert_eq!(result.num_matches(), 4);
        assert_eq!(result.wins(Player::One), 3);
        assert_eq!(result.wins(Player::Two), 1);
        assert_eq!(result.p1_win_rate(), 0.75);
        assert_eq!(result.p2_win_rate(), 0.25);
        assert_eq!(result.win_rate(Player::Two), result.p2_win_rate());
        assert_eq!(result.p1_win_rate() + result.p2_win_rate(), 1.0);
    }

    #[test]
    fn test_flattened_game_scores() {
        let result = sample_result();
        assert_eq!(result.total_games(), 15);
        assert_eq!(result.game_scores().count(), 15);
        assert_eq!(result.game_scores().next(), Some(&GameScore::new(11, 5)));

        let p1 = result.points(Player::One);
        let p2 = result.points(Player::Two);
        assert_eq!(p1.len(), 15);
        assert_eq!(p2.len(), 15);
        assert_eq!(p1[3..7], [11, 9, 8, 12]);
        assert_eq!(p2[3..7], [7, 11, 11, 14]);
    }

    #[test]
    fn test_distribution_sized_by_observed_matches() {
        let config = MatchConfig::new(0.5, u32::MAX).unwrap();
        let result = SimulationResult::from_matches(
            config,
            vec![outcome(Player::Two, &[(3, 11), (11, 13), (11, 9), (8, 11)])],
        );

        let distribution = result.distribution();
        assert_eq!(distribution.match_lengths, vec![0, 0, 0, 0, 1]);
        assert_eq!(distribution.total_games, 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json() {
        let result = sample_result();
        let json = result.to_json().unwrap();
        assert!(json.contains("\"p1_win_rate\""));
        assert!(json.contains("\"matches\""));

        let parsed: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }

    #[cfg(feature = "serde")]
    fn sweep_json(winner: &str) -> serde_json::Value {
        let game = serde_json::json!({"p1_points": 11, "p2_points": 0});
        serde_json::json!({"winner": winner, "games": [game, game, game]})
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_wrong_winner() {
        let json = serde_json::json!({
            "config": {"p1_point_win_prob": 0.5, "best_of": 5},
            "p1_win_rate": 0.9,
            "p2_win_rate": 0.9,
            "matches": [sweep_json("Two")],
        });
        assert!(serde_json::from_value::<SimulationResult>(json).is_err());
        assert!(serde_json::from_value::<MatchOutcome>(sweep_json("Two")).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_empty_and_unfinished_matches() {
        let empty = serde_json::json!({"winner": "One", "games": []});
        assert!(serde_json::from_value::<MatchOutcome>(empty).is_err());

        let unfinished = serde_json::json!({
            "winner": "One",
            "games": [
                {"p1_points": 11, "p2_points": 3},
                {"p1_points": 11, "p2_points": 10},
            ],
        });
        assert!(serde_json::from_value::<MatchOutcome>(unfinished).is_err());

        let no_matches = serde_json::json!({
            "config": {"p1_point_win_prob": 0.5, "best_of": 5},
            "p1_win_rate": 1.0,
            "p2_win_rate": 0.0,
            "matches": [],
        });
        assert!(serde_json::from_value::<SimulationResult>(no_matches).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_match_format() {
        // Three straight games finish a best of five but not a best of seven.
        let json = serde_json::json!({
            "config": {"p1_point_win_prob": 0.5, "best_of": 7},
            "p1_win_rate": 1.0,
            "p2_win_rate": 0.0,
            "matches": [sweep_json("One")],
        });
        assert!(serde_json::from_value::<SimulationResult>(json).is_err());

        let outcome = outcome(Player::One, &[(11, 0), (11, 0), (11, 0)]);
        assert!(outcome.check_format(3).is_ok());
        assert!(matches!(
            outcome.check_format(4),
            Err(SimulationError::InvalidResult(_))
        ));
        assert!(matches!(
            outcome.check_format(2),
            Err(SimulationError::InvalidResult(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_recomputes_win_rates() {
        let json = serde_json::json!({
            "config": {"p1_point_win_prob": 0.5, "best_of": 5},
            "p1_win_rate": 0.9,
            "p2_win_rate": 0.9,
            "matches": [sweep_json("One")],
        });
        let result: SimulationResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.p1_win_rate(), 1.0);
        assert_eq!(result.p2_win_rate(), 0.0);
        assert_eq!(result.wins(Player::One), 1);
    }
}
