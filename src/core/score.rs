use std::fmt;

use super::Player;

/// Points a player needs before a game can end.
pub const POINTS_TO_WIN: u32 = 11;
/// Lead a player needs over the opponent before a game can end.
pub const WINNING_MARGIN: u32 = 2;

/// Where a game stands after the latest point.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GameStatus {
    /// Nobody has reached 11 points with a two point lead yet.
    InProgress,
    /// Terminal. The contained player has won the game.
    Won(Player),
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }
}

/// The points each player has scored in a single game.
///
/// A score is built up one point at a time with [`GameScore::record_point`]
/// and its [`GameScore::status`] tells whether the game is over.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct GameScore {
    pub p1_points: u32,
    pub p2_points: u32,
}

impl GameScore {
    pub fn new(p1_points: u32, p2_points: u32) -> Self {
        Self {
            p1_points,
            p2_points,
        }
    }

    /// Points scored by the given player.
    pub fn points(&self, player: Player) -> u32 {
        match player {
            Player::One => self.p1_points,
            Player::Two => self.p2_points,
        }
    }

    /// Award a single point and return the resulting status.
    pub fn record_point(&mut self, player: Player) -> GameStatus {
        match player {
            Player::One => self.p1_points += 1,
            Player::Two => self.p2_points += 1,
        }
        self.status()
    }

    /// Absolute difference between the two players' points.
    pub fn margin(&self) -> u32 {
        self.p1_points.abs_diff(self.p2_points)
    }

    /// Total number of points played so far.
    pub fn total_points(&self) -> u32 {
        self.p1_points + self.p2_points
    }

    /// A game is over once somebody has at least 11 points and leads by at
    /// least 2. Anything else, 10-9 and 11-10 included, is still in progress.
    pub fn status(&self) -> GameStatus {
        let someone_reached_target =
            self.p1_points >= POINTS_TO_WIN || self.p2_points >= POINTS_TO_WIN;

        if someone_reached_target && self.margin() >= WINNING_MARGIN {
            if self.p1_points > self.p2_points {
                GameStatus::Won(Player::One)
            } else {
                GameStatus::Won(Player::Two)
            }
        } else {
            GameStatus::InProgress
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.status().winner()
    }

    /// Whether the game went past 10-10.
    pub fn went_to_deuce(&self) -> bool {
        self.p1_points.min(self.p2_points) >= POINTS_TO_WIN - 1
    }
}

impl fmt::Display for GameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.p1_points, self.p2_points)
    }
}
