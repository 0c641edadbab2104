//! Game state and turn transitions.

use super::action::{Move, MoveError};
use super::board::Board;
use super::coord::Coord;
use super::types::{GameStatus, Mode, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// Created at game start and mutated only through [`GameState::apply_move`].
/// Playing again means building a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    current_side: Side,
    mode: Mode,
    is_over: bool,
    winner: Option<Side>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a game on an empty board with `first` to move.
    #[instrument]
    pub fn new(mode: Mode, first: Side) -> Self {
        Self {
            board: Board::new(),
            current_side: first,
            mode,
            is_over: false,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move, or the side that made the final move once the game is over.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// True once the game was won or drawn.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Winner of a finished game; `None` for a draw or an unfinished game.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.is_over, self.winner) {
            (false, _) => GameStatus::Ongoing,
            (true, Some(side)) => GameStatus::Won(side),
            (true, None) => GameStatus::Draw,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays the current side's mark at `coord`.
    ///
    /// The status is evaluated for the side that just moved; the turn passes
    /// to the opponent only while the game is still ongoing. On any error the
    /// game is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already finished.
    /// - [`MoveError::CellOccupied`] if the cell is taken.
    /// - [`MoveError::InvariantViolation`] if a game invariant fails after the
    ///   move (checked in debug builds or with the `verification` feature).
    #[instrument(skip(self), fields(side = %self.current_side))]
    pub fn apply_move(&mut self, coord: Coord) -> Result<GameStatus, MoveError> {
        if self.is_over {
            return Err(MoveError::GameOver);
        }

        let mut next = self.clone();
        let status = next.advance(coord)?;

        #[cfg(any(debug_assertions, feature = "verification"))]
        next.verify()?;

        *self = next;
        Ok(status)
    }

    fn advance(&mut self, coord: Coord) -> Result<GameStatus, MoveError> {
        let mover = self.current_side;
        self.board.place(coord.row(), coord.col(), mover)?;
        self.history.push(Move::new(mover, coord));

        let status = self.board.check_status(mover);
        match status {
            GameStatus::Ongoing => {
                self.current_side = mover.opponent();
                debug!(next = %self.current_side, "Turn passes");
            }
            GameStatus::Won(side) => {
                self.is_over = true;
                self.winner = Some(side);
                info!(winner = %side, moves = self.history.len(), "Game won");
            }
            GameStatus::Draw => {
                self.is_over = true;
                info!(moves = self.history.len(), "Game drawn");
            }
        }
        Ok(status)
    }

    #[cfg(any(debug_assertions, feature = "verification"))]
    fn verify(&self) -> Result<(), MoveError> {
        use super::invariants::{GameInvariants, InvariantSet};

        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new(Mode::Single, Side::X);
        assert_eq!(game.current_side(), Side::X);
        assert_eq!(game.mode(), Mode::Single);
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameState::new(Mode::Two, Side::O);
        assert_eq!(game.apply_move(at(0, 0)), Ok(GameStatus::Ongoing));
        assert_eq!(game.current_side(), Side::X);
        assert_eq!(game.apply_move(at(1, 1)), Ok(GameStatus::Ongoing));
        assert_eq!(game.current_side(), Side::O);
        assert_eq!(
            game.history(),
            &[Move::new(Side::O, at(0, 0)), Move::new(Side::X, at(1, 1))]
        );
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut game = GameState::new(Mode::Two, Side::O);
        game.apply_move(at(1, 1)).unwrap();
        let before = game.clone();

        assert_eq!(
            game.apply_move(at(1, 1)),
            Err(MoveError::CellOccupied(at(1, 1)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_stops_the_game() {
        let mut game = GameState::new(Mode::Two, Side::X);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.apply_move(at(row, col)).unwrap();
        }
        assert_eq!(game.apply_move(at(0, 2)), Ok(GameStatus::Won(Side::X)));
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Side::X));
        assert_eq!(game.current_side(), Side::X);
        assert_eq!(game.apply_move(at(2, 2)), Err(MoveError::GameOver));
    }

    #[cfg(any(debug_assertions, feature = "verification"))]
    #[test]
    fn test_invariant_failure_leaves_game_untouched() {
        let mut game = GameState::new(Mode::Two, Side::O);
        game.apply_move(at(0, 0)).unwrap();
        // A mark the history knows nothing about.
        game.board.place(2, 2, Side::X).unwrap();
        let before = game.clone();

        assert!(matches!(
            game.apply_move(at(1, 1)),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(game, before);
        assert_eq!(game.current_side(), Side::X);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_draw_stops_the_game() {
        let mut game = GameState::new(Mode::Two, Side::O);
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0)];
        for (row, col) in moves {
            assert_eq!(game.apply_move(at(row, col)), Ok(GameStatus::Ongoing));
        }
        assert_eq!(game.apply_move(at(2, 2)), Ok(GameStatus::Draw));
        assert!(game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::Draw);
    }
}
