//! Board coordinates and move-text parsing.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// A validated `(row, col)` pair, both in `0..3`.
///
/// Deserialization goes through [`Coord::new`], so off-board values are
/// rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    row: usize,
    col: usize,
}

/// Unchecked wire form of [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = MoveError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl Coord {
    /// The centre cell.
    pub const CENTER: Coord = Coord { row: 1, col: 1 };

    /// The four corners, in row-major order.
    pub const CORNERS: [Coord; 4] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, rejecting values outside the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] if `row` or `col` is not in `0..3`.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::InvalidCoordinate(format!(
                "({}, {}) is off the board; rows and columns are 0, 1 or 2",
                row, col
            )));
        }
        Ok(Self { row, col })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index into a flat 9-cell array.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Coordinate for a row-major index, if it is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then(|| Self {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE * SIZE).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Parses move text of the form `"<row>,<col>"`, e.g. `" 1 , 2 "`.
impl FromStr for Coord {
    type Err = MoveError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [row, col] = parts.as_slice() else {
            return Err(MoveError::InvalidCoordinate(
                "enter the row and column separated by a comma, e.g. 1,2".to_string(),
            ));
        };

        let parse = |text: &str| {
            text.parse::<usize>().map_err(|_| {
                MoveError::InvalidCoordinate(format!(
                    "'{}' is not a row or column; use 0, 1 or 2",
                    text
                ))
            })
        };

        Coord::new(parse(row)?, parse(col)?)
    }
}
