//! Balanced marks invariant: turns alternate, so counts stay within one.

use super::super::{GameState, Side};
use super::Invariant;
use tracing::warn;

/// Invariant: the O and X mark counts differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let o_count = game.board().count(Side::O);
        let x_count = game.board().count(Side::X);
        let valid = o_count.abs_diff(x_count) <= 1;
        if !valid {
            warn!(o_count, x_count, "Mark counts drifted apart");
        }
        valid
    }

    fn description() -> &'static str {
        "O and X mark counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Mode};

    #[test]
    fn test_holds_through_a_game() {
        let mut game = GameState::new(Mode::Two, Side::X);
        assert!(BalancedMarksInvariant::holds(&game));
        for (row, col) in [(1, 1), (0, 0), (2, 2)] {
            game.apply_move(Coord::new(row, col).unwrap()).unwrap();
            assert!(BalancedMarksInvariant::holds(&game));
        }
    }

    #[test]
    fn test_double_move_violates() {
        let mut game = GameState::new(Mode::Two, Side::O);
        game.board.place(0, 0, Side::O).unwrap();
        game.board.place(0, 1, Side::O).unwrap();
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}
