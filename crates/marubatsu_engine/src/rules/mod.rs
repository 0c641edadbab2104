//! Game rules for marubatsu.
//!
//! Pure functions over a [`Board`]. They are kept apart from board storage so
//! the move selector can place, evaluate and take back marks without
//! duplicating win detection.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, GameStatus, Side};
use tracing::instrument;

/// Status of the board right after `mover` placed a mark.
///
/// Any complete line is credited to `mover`, so call this before handing the
/// turn to the other side.
#[instrument(level = "debug", skip(board))]
pub fn check_status(board: &Board, mover: Side) -> GameStatus {
    if check_winner(board).is_some() {
        GameStatus::Won(mover)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ongoing() {
        let board = Board::from_rows(["O  ", " X ", "   "]).unwrap();
        assert_eq!(check_status(&board, Side::X), GameStatus::Ongoing);
    }

    #[test]
    fn test_win_is_credited_to_mover() {
        let board = Board::from_rows(["OOO", "XX ", "   "]).unwrap();
        assert_eq!(check_status(&board, Side::O), GameStatus::Won(Side::O));
    }

    #[test]
    fn test_full_board_is_draw_for_either_mover() {
        let board = Board::from_rows(["OXO", "OXX", "XOO"]).unwrap();
        assert_eq!(check_status(&board, Side::O), GameStatus::Draw);
        assert_eq!(check_status(&board, Side::X), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let board = Board::from_rows(["OXO", "XOX", "XOO"]).unwrap();
        assert!(is_full(&board));
        assert_eq!(check_status(&board, Side::O), GameStatus::Won(Side::O));
    }
}
