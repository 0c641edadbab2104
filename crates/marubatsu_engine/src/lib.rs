//! Marubatsu engine - pure tic-tac-toe rules and CPU move selection.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, placement, and scoped speculative placement
//! - **Rules**: win, draw and status detection as pure functions
//! - **Game**: turn transitions and the recorded outcome
//! - **Invariants**: properties checked after every accepted move
//! - **Selector**: the CPU opponent's fixed-priority heuristic
//!
//! # Example
//!
//! ```
//! use marubatsu_engine::{Coord, GameState, GameStatus, Mode, MoveSelector, Side};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut game = GameState::new(Mode::Single, Side::O);
//! game.apply_move(Coord::new(0, 0)?)?;
//!
//! let mut selector = MoveSelector::new(StdRng::seed_from_u64(7));
//! let mut scratch = game.board().clone();
//! let choice = selector.select(&mut scratch, game.current_side()).expect("free cell");
//! assert_eq!(game.apply_move(choice.coord)?, GameStatus::Ongoing);
//! # Ok::<(), marubatsu_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod coord;
mod game;
pub mod invariants;
pub mod rules;
mod selector;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, Speculation};
pub use coord::{Coord, SIZE};
pub use game::GameState;
pub use selector::{Choice, MoveSelector, Step};
pub use types::{Cell, GameStatus, Mode, Side};
