//! Player trait and implementations.

mod cpu;
mod human;

pub use cpu::CpuPlayer;
pub use human::HumanPlayer;

use crate::console::Prompter;
use anyhow::Result;
use marubatsu_engine::{Coord, GameState};

/// Something that can pick moves for one side.
pub trait Player {
    /// Picks a legal empty cell for the side to move.
    ///
    /// Does not apply the move; the orchestrator does.
    fn next_move(&mut self, game: &GameState, prompter: &mut dyn Prompter) -> Result<Coord>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether a person needs to see the board before this player moves.
    fn is_interactive(&self) -> bool {
        true
    }
}
