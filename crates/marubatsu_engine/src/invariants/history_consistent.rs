//! History consistency invariant: the board is the replay of the moves.

use super::super::{Board, GameState};
use super::Invariant;
use tracing::warn;

/// Invariant: replaying the move history onto an empty board reproduces the
/// current board, and consecutive moves come from different sides.
///
/// A replay that lands on an occupied cell means a mark was overwritten.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let alternating = game
            .history()
            .windows(2)
            .all(|pair| pair[0].side != pair[1].side);

        let mut replayed = Board::new();
        let replay_ok = game.history().iter().all(|mov| {
            replayed
                .place(mov.coord.row(), mov.coord.col(), mov.side)
                .is_ok()
        });

        let valid = alternating && replay_ok && replayed == *game.board();
        if !valid {
            warn!(
                alternating,
                replay_ok,
                moves = game.history().len(),
                "History does not reproduce the board"
            );
        }
        valid
    }

    fn description() -> &'static str {
        "Move history alternates sides and reproduces the board"
    }
}
