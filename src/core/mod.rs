/// The two sides of a match.
mod player;
/// Export `Player`
pub use self::player::Player;

/// Game scores and the rule that decides when a game is over.
mod score;
/// Export `GameScore`, `GameStatus` and the scoring constants
pub use self::score::{GameScore, GameStatus, POINTS_TO_WIN, WINNING_MARGIN};
