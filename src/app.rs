//! Top-level session loop: menus, games and replays.

use crate::config::Settings;
use crate::console::{Prompter, Renderer};
use crate::orchestrator::Orchestrator;
use crate::players::{CpuPlayer, HumanPlayer, Player};
use anyhow::Result;
use marubatsu_engine::{GameState, GameStatus, Mode, MoveSelector, Side};
use rand::Rng;
use tracing::{debug, info, instrument};

const MODE_OPTIONS: [&str; 2] = ["Single player (vs CPU)", "Two players"];

/// Answers that skip the menus on the first round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presets {
    /// Game mode.
    pub mode: Option<Mode>,
    /// Human side in single-player mode.
    pub side: Option<Side>,
}

/// A terminal session that plays games until the user stops.
#[derive(Debug)]
pub struct App<R> {
    settings: Settings,
    renderer: Renderer,
    presets: Presets,
    selector: MoveSelector<R>,
}

impl<R: Rng> App<R> {
    /// Creates a session; `rng` drives the CPU's random picks for every game.
    pub fn new(settings: Settings, presets: Presets, rng: R) -> Self {
        Self {
            renderer: Renderer::from_settings(&settings),
            settings,
            presets,
            selector: MoveSelector::new(rng),
        }
    }

    /// Runs the session until the user cancels a menu or declines a replay.
    ///
    /// # Errors
    ///
    /// Fails on terminal I/O errors or when input closes during a game.
    #[instrument(skip_all)]
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        let mut presets = self.presets;
        let mut round = 0u32;

        loop {
            self.renderer.banner(prompter.output())?;

            let Some(mode) = self.choose_mode(prompter, presets.mode.take())? else {
                prompter.notice("Goodbye!")?;
                info!(round, "Session cancelled at mode selection");
                return Ok(());
            };

            let human = match mode {
                Mode::Single => match self.choose_side(prompter, presets.side.take())? {
                    Some(side) => Some(side),
                    None => {
                        prompter.notice("Goodbye!")?;
                        info!(round, "Session cancelled at side selection");
                        return Ok(());
                    }
                },
                Mode::Two => None,
            };

            round += 1;
            let status = self.play_round(prompter, mode, human)?;
            info!(round, %mode, %status, "Round finished");

            if !prompter.confirm("Play again?")? {
                prompter.notice("Thanks for playing!")?;
                return Ok(());
            }
        }
    }

    fn choose_mode(
        &self,
        prompter: &mut dyn Prompter,
        preset: Option<Mode>,
    ) -> Result<Option<Mode>> {
        if let Some(mode) = preset {
            debug!(%mode, "Mode preset");
            return Ok(Some(mode));
        }
        let mode = prompter
            .select("Choose a mode", &MODE_OPTIONS)?
            .map(|idx| if idx == 0 { Mode::Single } else { Mode::Two });
        Ok(mode)
    }

    fn choose_side(
        &self,
        prompter: &mut dyn Prompter,
        preset: Option<Side>,
    ) -> Result<Option<Side>> {
        if let Some(side) = preset {
            debug!(%side, "Side preset");
            return Ok(Some(side));
        }
        let first = *self.settings.first_side();
        let second = first.opponent();
        let options = [
            format!("First ({})", first),
            format!("Second ({})", second),
        ];
        let labels: Vec<&str> = options.iter().map(String::as_str).collect();
        let side = prompter
            .select("Do you want to go first or second?", &labels)?
            .map(|idx| if idx == 0 { first } else { second });
        Ok(side)
    }

    fn play_round(
        &mut self,
        prompter: &mut dyn Prompter,
        mode: Mode,
        human: Option<Side>,
    ) -> Result<GameStatus> {
        let game = GameState::new(mode, *self.settings.first_side());
        let renderer = self.renderer;

        let (player_o, player_x): (Box<dyn Player + '_>, Box<dyn Player + '_>) = match human {
            Some(Side::O) => (
                Box::new(HumanPlayer::new("You")),
                Box::new(CpuPlayer::new("CPU", &mut self.selector)),
            ),
            Some(Side::X) => (
                Box::new(CpuPlayer::new("CPU", &mut self.selector)),
                Box::new(HumanPlayer::new("You")),
            ),
            None => (
                Box::new(HumanPlayer::new("Player O")),
                Box::new(HumanPlayer::new("Player X")),
            ),
        };

        Orchestrator::new(game, player_o, player_x, renderer).run(prompter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ConsolePrompter;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn quiet() -> Settings {
        let mut settings = Settings::default();
        settings.disable_color();
        settings.disable_clear_screen();
        settings
    }

    fn run(settings: Settings, presets: Presets, input: &str) -> (Result<()>, String) {
        let mut prompter =
            ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
        let mut app = App::new(settings, presets, StdRng::seed_from_u64(3));
        let result = app.run(&mut prompter);
        (result, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn test_cancel_at_mode_menu() {
        let (result, out) = run(quiet(), Presets::default(), "0\n");
        assert!(result.is_ok());
        assert!(out.contains("[1] Single player (vs CPU)"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_cancel_at_side_menu() {
        let (result, out) = run(quiet(), Presets::default(), "1\nq\n");
        assert!(result.is_ok());
        assert!(out.contains("[1] First (O)"));
        assert!(out.contains("[2] Second (X)"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_side_labels_follow_first_side() {
        let mut settings = quiet();
        settings.set_first_side(Side::X);
        let (_, out) = run(settings, Presets::default(), "1\n0\n");
        assert!(out.contains("[1] First (X)"));
        assert!(out.contains("[2] Second (O)"));
    }

    #[test]
    fn test_presets_skip_menus_once() {
        let presets = Presets {
            mode: Some(Mode::Two),
            side: None,
        };
        let input = "0,0\n1,1\n0,1\n2,2\n0,2\ny\n0\n";
        let (result, out) = run(quiet(), presets, input);
        assert!(result.is_ok());
        assert!(out.contains("Winner: O"));
        // The mode menu only appears for the second round.
        assert_eq!(out.matches("[2] Two players").count(), 1);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_input_closed_mid_game_is_an_error() {
        let (result, _) = run(quiet(), Presets::default(), "2\n0,0\n");
        assert!(result.is_err());
    }
}
