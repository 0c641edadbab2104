//! CPU opponent: a fixed-priority move heuristic.
//!
//! The selector tries, in order, to win now, block the opponent's immediate
//! win, take the centre, take a random free corner and finally take any random
//! free cell. It looks exactly one move ahead; it is not a full search.

use super::board::Board;
use super::coord::Coord;
use super::types::{Cell, Side};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Heuristic step that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Step {
    /// Completes a line for the selector's side.
    Win,
    /// Occupies the cell where the opponent would complete a line.
    Block,
    /// Takes the centre.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes a random free cell.
    Any,
}

/// A move chosen by the selector, already placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Where the mark was placed.
    pub coord: Coord,
    /// Which heuristic step chose it.
    pub step: Step,
}

/// Picks and plays CPU moves.
///
/// Random steps draw from the owned RNG; seed it (for example with
/// `StdRng::seed_from_u64`) to make corner and fallback picks reproducible.
#[derive(Debug, Clone)]
pub struct MoveSelector<R> {
    rng: R,
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a move for `side` and places it on `board`.
    ///
    /// Exactly one previously empty cell becomes `side`'s. Returns `None`,
    /// leaving the board untouched, when no empty cell is left.
    #[instrument(skip(self, board))]
    pub fn select(&mut self, board: &mut Board, side: Side) -> Option<Choice> {
        let (coord, step) = if let Some(coord) = Self::winning_move(board, side) {
            (coord, Step::Win)
        } else if let Some(coord) = Self::blocking_move(board, side) {
            (coord, Step::Block)
        } else if board.cell(Coord::CENTER) == Cell::Empty {
            (Coord::CENTER, Step::Center)
        } else if let Some(coord) = self.random_corner(board) {
            (coord, Step::Corner)
        } else if let Some(coord) = self.random_cell(board) {
            (coord, Step::Any)
        } else {
            debug!("No empty cell left to play");
            return None;
        };

        if step != Step::Win {
            // Win already committed its speculative mark; the rest are free cells.
            board.place(coord.row(), coord.col(), side).ok()?;
        }
        debug!(%coord, %step, "CPU chose move");
        Some(Choice { coord, step })
    }

    /// First cell, row-major, where `side` completes a line. The mark stays.
    fn winning_move(board: &mut Board, side: Side) -> Option<Coord> {
        for coord in board.empty_cells() {
            let spec = board.speculate(coord.row(), coord.col(), side).ok()?;
            if spec.board().check_winner() == Some(side) {
                return Some(spec.commit());
            }
        }
        None
    }

    /// First cell, row-major, where the opponent would complete a line.
    /// The board is left as it was.
    fn blocking_move(board: &mut Board, side: Side) -> Option<Coord> {
        let opponent = side.opponent();
        for coord in board.empty_cells() {
            let spec = board.speculate(coord.row(), coord.col(), opponent).ok()?;
            if spec.board().check_winner() == Some(opponent) {
                return Some(spec.coord());
            }
        }
        None
    }

    fn random_corner(&mut self, board: &Board) -> Option<Coord> {
        let corners: Vec<Coord> = Coord::CORNERS
            .into_iter()
            .filter(|&corner| board.cell(corner) == Cell::Empty)
            .collect();
        corners.choose(&mut self.rng).copied()
    }

    fn random_cell(&mut self, board: &Board) -> Option<Coord> {
        board.empty_cells().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn selector(seed: u64) -> MoveSelector<StdRng> {
        MoveSelector::new(StdRng::seed_from_u64(seed))
    }

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_board_takes_center() {
        let mut board = Board::new();
        let choice = selector(1).select(&mut board, Side::O).unwrap();
        assert_eq!(choice, Choice { coord: at(1, 1), step: Step::Center });
        assert_eq!(board.get(1, 1), Ok(Cell::Occupied(Side::O)));
    }

    #[test]
    fn test_blocks_unique_threat() {
        let mut board = Board::from_rows(["OO ", "   ", "   "]).unwrap();
        let choice = selector(2).select(&mut board, Side::X).unwrap();
        assert_eq!(choice, Choice { coord: at(0, 2), step: Step::Block });
        assert_eq!(board.get(0, 2), Ok(Cell::Occupied(Side::X)));
        assert_eq!(board.occupied(), 3);
    }

    #[test]
    fn test_win_beats_block() {
        // X can win at (1,2); O threatens (0,2).
        let mut board = Board::from_rows(["OO ", "XX ", "O  "]).unwrap();
        let choice = selector(3).select(&mut board, Side::X).unwrap();
        assert_eq!(choice, Choice { coord: at(1, 2), step: Step::Win });
        assert_eq!(board.check_winner(), Some(Side::X));
        assert_eq!(board.get(0, 2), Ok(Cell::Empty));
    }

    #[test]
    fn test_first_threat_in_row_major_order_is_blocked() {
        // O threatens (0,2) and (2,0); only the first is answered.
        let mut board = Board::from_rows(["OO ", "O X", " X "]).unwrap();
        let choice = selector(4).select(&mut board, Side::X).unwrap();
        assert_eq!(choice, Choice { coord: at(0, 2), step: Step::Block });
        assert_eq!(board.get(2, 0), Ok(Cell::Empty));
    }

    #[test]
    fn test_takes_corner_when_center_taken() {
        for seed in 0..20 {
            let mut board = Board::from_rows(["   ", " O ", "   "]).unwrap();
            let choice = selector(seed).select(&mut board, Side::X).unwrap();
            assert_eq!(choice.step, Step::Corner);
            assert!(Coord::CORNERS.contains(&choice.coord));
        }
    }

    #[test]
    fn test_corner_is_one_of_the_free_ones() {
        for seed in 0..20 {
            let mut board = Board::from_rows(["X  ", " O ", "   "]).unwrap();
            let choice = selector(seed).select(&mut board, Side::X).unwrap();
            assert_eq!(choice.step, Step::Corner);
            assert!([at(0, 2), at(2, 0), at(2, 2)].contains(&choice.coord));
        }
    }

    #[test]
    fn test_falls_back_to_any_cell() {
        // Centre and corners taken, no line threats.
        let mut board = Board::from_rows(["XOX", " O ", "OXO"]).unwrap();
        let empty_before = board.empty_cells();
        let choice = selector(6).select(&mut board, Side::X).unwrap();
        assert_eq!(choice.step, Step::Any);
        assert!(empty_before.contains(&choice.coord));
        assert_eq!(board.cell(choice.coord), Cell::Occupied(Side::X));
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let board = Board::from_rows(["   ", " X ", "   "]).unwrap();
        let first = selector(42).select(&mut board.clone(), Side::O);
        let second = selector(42).select(&mut board.clone(), Side::O);
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::from_rows(["OXO", "OXX", "XOO"]).unwrap();
        let before = board.clone();
        assert_eq!(selector(7).select(&mut board, Side::O), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_places_exactly_one_mark_on_an_empty_cell() {
        let boards = [
            ["   ", "   ", "   "],
            ["O  ", " X ", "   "],
            ["OX ", " O ", "  X"],
            ["XOX", "OO ", "X  "],
        ];
        for (seed, rows) in boards.into_iter().enumerate() {
            for side in [Side::O, Side::X] {
                let mut board = Board::from_rows(rows).unwrap();
                let before = board.clone();
                let choice = selector(seed as u64).select(&mut board, side).unwrap();

                assert_eq!(before.cell(choice.coord), Cell::Empty);
                assert_eq!(board.cell(choice.coord), Cell::Occupied(side));
                assert_eq!(board.occupied(), before.occupied() + 1);
                let changed = Coord::all()
                    .filter(|&c| board.cell(c) != before.cell(c))
                    .count();
                assert_eq!(changed, 1);
            }
        }
    }
}
