//! Human player reading moves as `row,col` text.

use super::Player;
use crate::console::Prompter;
use anyhow::Result;
use marubatsu_engine::{Cell, Coord, GameState, MoveError};
use tracing::{debug, instrument};

const MOVE_PROMPT: &str = "Enter your move as row,col (e.g. 1,2)";

/// Human player at the keyboard.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    /// Re-prompts on malformed text, off-board coordinates and taken cells.
    #[instrument(skip(self, game, prompter), fields(player = %self.name))]
    fn next_move(&mut self, game: &GameState, prompter: &mut dyn Prompter) -> Result<Coord> {
        loop {
            let Some(text) = prompter.line(MOVE_PROMPT)? else {
                anyhow::bail!("Input closed while waiting for {}'s move", self.name);
            };

            let coord = match text.parse::<Coord>() {
                Ok(coord) => coord,
                Err(e) => {
                    debug!(input = %text, error = %e, "Rejected move text");
                    prompter.warn(&e.to_string())?;
                    continue;
                }
            };

            if game.board().cell(coord) != Cell::Empty {
                debug!(%coord, "Rejected occupied cell");
                prompter.warn(&MoveError::CellOccupied(coord).to_string())?;
                continue;
            }

            return Ok(coord);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
