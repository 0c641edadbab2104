//! Command-line interface for marubatsu.

use crate::config::{DEFAULT_CONFIG_PATH, Settings};
use clap::Parser;
use marubatsu_engine::{Mode, Side};
use std::path::PathBuf;

/// Marubatsu - tic-tac-toe in the terminal, against a friend or the CPU
#[derive(Parser, Debug)]
#[command(name = "marubatsu")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip the mode menu on the first game (single or two)
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Your side in single-player mode (o or x); skips the side menu on the first game
    #[arg(long)]
    pub side: Option<Side>,

    /// Side that opens every game (o or x)
    #[arg(long)]
    pub first: Option<Side>,

    /// Seed for the CPU's random corner and fallback picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the settings file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen between turns
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Applies command-line overrides on top of file settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if self.no_color {
            settings.disable_color();
        }
        if self.no_clear {
            settings.disable_clear_screen();
        }
        if let Some(first) = self.first {
            settings.set_first_side(first);
        }
        settings
    }
}
