//! Scripted terminal sessions driven through in-memory buffers.

use marubatsu::{App, ConsolePrompter, Presets, Settings};
use marubatsu_engine::{Mode, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

fn plain_settings() -> Settings {
    let mut settings = Settings::default();
    settings.disable_color();
    settings.disable_clear_screen();
    settings
}

fn play(presets: Presets, input: &str) -> (anyhow::Result<()>, String) {
    let mut prompter =
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
    let mut app = App::new(plain_settings(), presets, StdRng::seed_from_u64(11));
    let result = app.run(&mut prompter);
    (result, String::from_utf8(prompter.into_output()).unwrap())
}

#[test]
fn test_two_player_game_to_a_win() {
    let (result, out) = play(Presets::default(), "2\n0,0\n1,1\n0,1\n2,2\n0,2\nn\n");
    assert!(result.is_ok());
    assert!(out.contains("Welcome to marubatsu"));
    assert!(out.contains("Current player: O"));
    assert!(out.contains("Current player: X"));
    assert!(out.contains("0   O | O | O"));
    assert!(out.contains("Winner: O"));
    assert!(out.ends_with("Thanks for playing!\n"));
}

#[test]
fn test_bad_move_text_is_reprompted() {
    let input = "2\n1 1\n0,5\n0,0\n0,0\n1,1\n0,1\n2,2\n0,2\nn\n";
    let (result, out) = play(Presets::default(), input);
    assert!(result.is_ok());
    assert!(out.contains("enter the row and column separated by a comma"));
    assert!(out.contains("(0, 5) is off the board"));
    assert!(out.contains("Cell 0,0 is already occupied"));
    assert!(out.contains("Winner: O"));
}

#[test]
fn test_single_player_against_cpu_draws() {
    // Every CPU reply here is forced: center, two blocks, then the last corner.
    let input = "1\n1\n0,0\n0,1\n2,0\n1,2\n2,1\nn\n";
    let (result, out) = play(Presets::default(), input);
    assert!(result.is_ok());
    assert!(out.contains("It's a draw!"));
    assert!(!out.contains("Current player"));
    assert!(out.contains("2   O | O | X"));
}

#[test]
fn test_cpu_opens_when_human_plays_second() {
    let presets = Presets {
        mode: Some(Mode::Single),
        side: Some(Side::X),
    };
    let (result, out) = play(presets, "");
    assert!(result.is_err());
    assert!(out.contains("1     | O |"));
    assert!(!out.contains("Choose a mode"));
}

#[test]
fn test_replay_returns_to_mode_menu() {
    let input = "2\n0,0\n1,1\n0,1\n2,2\n0,2\ny\nq\n";
    let (result, out) = play(Presets::default(), input);
    assert!(result.is_ok());
    assert_eq!(out.matches("Choose a mode").count(), 2);
    assert_eq!(out.matches("Welcome to marubatsu").count(), 2);
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_quit_at_mode_menu() {
    let (result, out) = play(Presets::default(), "0\n");
    assert!(result.is_ok());
    assert!(out.ends_with("Goodbye!\n"));
    assert!(!out.contains("Marubatsu (tic-tac-toe)"));
}
