//! Marubatsu - tic-tac-toe in the terminal
//!
//! Game rules and the CPU move selector live in [`marubatsu_engine`]; this
//! crate is the driving layer around them.
//!
//! # Architecture
//!
//! - **Console**: line-based prompts and board rendering over any reader/writer
//! - **Players**: humans at the keyboard and the CPU selector
//! - **Orchestrator**: runs one game between two players
//! - **App**: menus, presets and replays
//!
//! # Example
//!
//! ```no_run
//! use marubatsu::{App, ConsolePrompter, Presets, Settings};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut prompter = ConsolePrompter::new(stdin.lock(), std::io::stdout(), true);
//! let mut app = App::new(Settings::default(), Presets::default(), StdRng::seed_from_u64(7));
//! app.run(&mut prompter)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;
pub mod logging;
mod orchestrator;
mod players;

pub use app::{App, Presets};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
pub use console::{ConsolePrompter, Prompter, Renderer};
pub use orchestrator::Orchestrator;
pub use players::{CpuPlayer, HumanPlayer, Player};
