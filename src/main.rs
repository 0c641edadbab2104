//! Marubatsu - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use marubatsu::{App, Cli, ConsolePrompter, Presets, Settings, logging};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.apply(Settings::load(&cli.config)?);
    logging::init(&settings)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, config = %cli.config.display(), "Starting marubatsu");

    let presets = Presets {
        mode: cli.mode,
        side: cli.side,
    };
    let color = *settings.color();
    let mut app = App::new(settings, presets, StdRng::seed_from_u64(seed));

    let stdin = std::io::stdin();
    let mut prompter = ConsolePrompter::new(stdin.lock(), std::io::stdout(), color);
    app.run(&mut prompter)?;

    info!("Session ended");
    Ok(())
}
