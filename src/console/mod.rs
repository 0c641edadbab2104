//! Terminal presentation and input.

mod prompter;
mod render;

pub use prompter::{ConsolePrompter, Prompter};
pub use render::Renderer;
