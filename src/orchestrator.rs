//! Game orchestration between two players.

use crate::console::{Prompter, Renderer};
use crate::players::Player;
use anyhow::Result;
use marubatsu_engine::{GameState, GameStatus, MoveError, Side};
use tracing::{debug, info, instrument, warn};

/// Runs one game: asks each side's player in turn and applies the moves.
pub struct Orchestrator<'a> {
    game: GameState,
    player_o: Box<dyn Player + 'a>,
    player_x: Box<dyn Player + 'a>,
    renderer: Renderer,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator for a fresh game.
    pub fn new(
        game: GameState,
        player_o: Box<dyn Player + 'a>,
        player_x: Box<dyn Player + 'a>,
        renderer: Renderer,
    ) -> Self {
        Self {
            game,
            player_o,
            player_x,
            renderer,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Plays until the game is won or drawn and returns the final status.
    ///
    /// The board is drawn before each interactive player's turn and once more
    /// with the result at the end.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move (e.g. input closed) or the
    /// terminal cannot be written.
    #[instrument(skip_all, fields(mode = %self.game.mode(), first = %self.game.current_side()))]
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<GameStatus> {
        info!(
            o = self.player_o.name(),
            x = self.player_x.name(),
            "Starting game"
        );

        loop {
            let side = self.game.current_side();
            let player = match side {
                Side::O => &mut self.player_o,
                Side::X => &mut self.player_x,
            };

            if player.is_interactive() {
                self.renderer.board(prompter.output(), &self.game)?;
            }

            let coord = player.next_move(&self.game, prompter)?;
            debug!(player = player.name(), %side, %coord, "Move chosen");

            match self.game.apply_move(coord) {
                Ok(GameStatus::Ongoing) => {}
                Ok(status) => {
                    self.renderer.board(prompter.output(), &self.game)?;
                    self.renderer.outcome(prompter.output(), &self.game)?;
                    info!(%status, moves = self.game.history().len(), "Game finished");
                    return Ok(status);
                }
                Err(e @ (MoveError::InvalidCoordinate(_) | MoveError::CellOccupied(_))) => {
                    warn!(error = %e, "Player chose an illegal move");
                    prompter.warn(&e.to_string())?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
