//! CPU player driven by the move selector.

use super::Player;
use crate::console::Prompter;
use anyhow::Result;
use marubatsu_engine::{Coord, GameState, MoveSelector};
use rand::Rng;
use tracing::{info, instrument};

/// CPU opponent borrowing a shared selector.
///
/// The selector outlives single games so one seeded RNG stream covers a
/// whole session.
#[derive(Debug)]
pub struct CpuPlayer<'a, R> {
    name: String,
    selector: &'a mut MoveSelector<R>,
}

impl<'a, R: Rng> CpuPlayer<'a, R> {
    /// Creates a CPU player.
    pub fn new(name: impl Into<String>, selector: &'a mut MoveSelector<R>) -> Self {
        Self {
            name: name.into(),
            selector,
        }
    }
}

impl<R: Rng> Player for CpuPlayer<'_, R> {
    /// Runs the selector on a scratch copy of the board.
    #[instrument(skip_all, fields(player = %self.name))]
    fn next_move(&mut self, game: &GameState, _prompter: &mut dyn Prompter) -> Result<Coord> {
        let mut scratch = game.board().clone();
        let choice = self
            .selector
            .select(&mut scratch, game.current_side())
            .ok_or_else(|| anyhow::anyhow!("No empty cell left for {}", self.name))?;
        info!(coord = %choice.coord, step = %choice.step, "CPU move");
        Ok(choice.coord)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
