//! The 3x3 board and scoped speculative placement.

use super::action::MoveError;
use super::coord::{Coord, SIZE};
use super::rules;
use super::types::{Cell, GameStatus, Side};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three row strings of `O`, `X` and blanks.
    ///
    /// Any character other than `O`/`X` (case-insensitive) is read as empty,
    /// so `"OO "` and `"OO."` describe the same row.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] if a row is not exactly three
    /// characters long. A long row would put marks past the last column and a
    /// short one leaves a column undescribed, so both are coordinate errors;
    /// the message names the offending row.
    pub fn from_rows(rows: [&str; SIZE]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != SIZE {
                return Err(MoveError::InvalidCoordinate(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    chars.len(),
                    SIZE
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch.to_ascii_uppercase() {
                    'O' => Cell::Occupied(Side::O),
                    'X' => Cell::Occupied(Side::X),
                    _ => Cell::Empty,
                };
                board.cells[row * SIZE + col] = cell;
            }
        }
        Ok(board)
    }

    fn index(row: usize, col: usize) -> Result<usize, MoveError> {
        Ok(Coord::new(row, col)?.index())
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] if out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Ok(self.cells[Self::index(row, col)?])
    }

    /// Returns the cell at an already validated coordinate.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// True iff `(row, col)` is on the board and holds no mark.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] if out of range.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, MoveError> {
        Ok(self.get(row, col)? == Cell::Empty)
    }

    /// Puts `side`'s mark on an empty cell.
    ///
    /// The board is left untouched on error.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidCoordinate`] if out of range.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, side: Side) -> Result<(), MoveError> {
        let coord = Coord::new(row, col)?;
        if self.cell(coord) != Cell::Empty {
            return Err(MoveError::CellOccupied(coord));
        }
        self.cells[coord.index()] = Cell::Occupied(side);
        Ok(())
    }

    /// Clears a cell regardless of what it holds.
    ///
    /// Only speculative evaluation should ever take a mark back.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] if out of range.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let index = Self::index(row, col)?;
        self.cells[index] = Cell::Empty;
        Ok(())
    }

    /// Owner of a completed row, column or diagonal, if any.
    pub fn check_winner(&self) -> Option<Side> {
        rules::check_winner(self)
    }

    /// Cells of the first complete line, if any.
    pub fn winning_line(&self) -> Option<[Coord; 3]> {
        rules::winning_line(self)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Status right after `mover` placed a mark. See [`rules::check_status`].
    pub fn check_status(&self, mover: Side) -> GameStatus {
        rules::check_status(self, mover)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::all()
            .filter(|&coord| self.cell(coord) == Cell::Empty)
            .collect()
    }

    /// Number of cells holding `side`'s mark.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(side))
            .count()
    }

    /// Number of cells holding any mark.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Places `side` at `(row, col)` for evaluation only.
    ///
    /// The returned guard clears the cell again when dropped, unless
    /// [`Speculation::commit`] keeps the mark.
    ///
    /// # Errors
    ///
    /// Same as [`Board::place`]; no guard exists if placement failed.
    pub fn speculate(
        &mut self,
        row: usize,
        col: usize,
        side: Side,
    ) -> Result<Speculation<'_>, MoveError> {
        let coord = Coord::new(row, col)?;
        self.place(row, col, side)?;
        trace!(%coord, %side, "Speculative placement");
        Ok(Speculation {
            board: self,
            coord,
            committed: false,
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let symbol = match self.cells[row * SIZE + col] {
                    Cell::Empty => ' ',
                    Cell::Occupied(Side::O) => 'O',
                    Cell::Occupied(Side::X) => 'X',
                };
                write!(f, "{}", symbol)?;
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// A hypothetical mark on a borrowed board.
///
/// Dropping the guard restores the cell to empty, on every path out of the
/// evaluation.
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    coord: Coord,
    committed: bool,
}

impl Speculation<'_> {
    /// The board with the hypothetical mark in place.
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Where the hypothetical mark sits.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Keeps the mark on the board and returns its coordinate.
    pub fn commit(mut self) -> Coord {
        self.committed = true;
        self.coord
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        if !self.committed {
            // Coordinate was validated when the guard was created.
            let _ = self.board.remove(self.coord.row(), self.coord.col());
            trace!(coord = %self.coord, "Speculative placement reverted");
        }
    }
}
