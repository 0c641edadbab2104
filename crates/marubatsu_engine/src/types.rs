//! Core domain types for marubatsu.

use serde::{Deserialize, Serialize};

/// One of the two marks on the board.
///
/// `O` is the historical first player (player A), `X` the second (player B).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Player A.
    O,
    /// Player B.
    X,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::O => Side::X,
            Side::X => Side::O,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a side's mark.
    Occupied(Side),
}

impl Cell {
    /// Returns the side occupying this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// Who is sitting at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// One human against the CPU.
    Single,
    /// Two humans sharing the terminal.
    Two,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Nobody has won and empty cells remain.
    Ongoing,
    /// The given side completed a line.
    Won(Side),
    /// The board filled up without a line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Won(side) => Some(side),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "In progress"),
            GameStatus::Won(side) => write!(f, "Winner: {}", side),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for side in Side::iter() {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn test_side_parses_case_insensitive() {
        assert_eq!(Side::from_str("o"), Ok(Side::O));
        assert_eq!(Side::from_str("X"), Ok(Side::X));
        assert!(Side::from_str("z").is_err());
    }

    #[test]
    fn test_mode_round_trips_through_text() {
        assert_eq!(Mode::from_str("single"), Ok(Mode::Single));
        assert_eq!(Mode::from_str("Two"), Ok(Mode::Two));
        assert_eq!(Mode::Two.to_string(), "two");
    }

    #[test]
    fn test_status_accessors() {
        assert!(!GameStatus::Ongoing.is_over());
        assert_eq!(GameStatus::Won(Side::X).winner(), Some(Side::X));
        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
