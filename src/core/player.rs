use std::fmt;

/// One of the two sides of a table tennis match.
///
/// `One` is always the player whose per-point win probability is configured.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in id order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The numeric id of the player, 1 or 2.
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Zero based index, handy for `[T; 2]` tallies.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The other side of the table.
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}
