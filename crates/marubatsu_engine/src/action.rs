//! Moves and the errors raised when applying them.

use super::{Coord, Side};
use serde::{Deserialize, Serialize};

/// A side placing its mark at a coordinate.
///
/// Recorded in the game history so the board can be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Where the mark goes.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, coord: Coord) -> Self {
        Self { side, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.coord)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..3`, or move text that is not `row,col`.
    #[display("Invalid coordinate: {}", _0)]
    InvalidCoordinate(String),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// A game invariant failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
