//! Settled outcome invariant: the recorded result matches the board.

use super::super::rules::{LINES, is_full};
use super::super::{Board, Cell, GameState, Side};
use super::Invariant;
use tracing::warn;

/// Invariant: `is_over` and `winner` agree with the lines on the board.
///
/// - a won game has a line for the winner and none for the loser;
/// - a drawn game has a full board and no line;
/// - an ongoing game has no line and at least one empty cell.
pub struct SettledOutcomeInvariant;

fn owns_line(board: &Board, side: Side) -> bool {
    let cells = board.cells();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(side)))
}

impl Invariant<GameState> for SettledOutcomeInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let o_line = owns_line(board, Side::O);
        let x_line = owns_line(board, Side::X);

        let valid = match (game.is_over(), game.winner()) {
            (true, Some(winner)) => owns_line(board, winner) && !owns_line(board, winner.opponent()),
            (true, None) => is_full(board) && !o_line && !x_line,
            (false, None) => !is_full(board) && !o_line && !x_line,
            (false, Some(_)) => false,
        };
        if !valid {
            warn!(
                is_over = game.is_over(),
                winner = ?game.winner(),
                o_line,
                x_line,
                "Recorded outcome disagrees with board"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Recorded outcome matches the lines on the board"
    }
}
