//! Win detection.

use super::super::{Board, Cell, Coord, Side};
use tracing::instrument;

/// The eight winning lines as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the side owning a complete line, if any.
///
/// Lines are scanned rows, then columns, then diagonals. Under alternating
/// play at most one side can own a line at the moment a move lands.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Side> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(side) if cells[b] == cells[a] && cells[c] == cells[a] => Some(side),
        _ => None,
    })
}

/// Returns the first complete line, as coordinates.
pub fn winning_line(board: &Board) -> Option<[Coord; 3]> {
    let cells = board.cells();
    LINES
        .iter()
        .find(|&&[a, b, c]| cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c])
        .and_then(|&[a, b, c]| {
            Some([
                Coord::from_index(a)?,
                Coord::from_index(b)?,
                Coord::from_index(c)?,
            ])
        })
}
