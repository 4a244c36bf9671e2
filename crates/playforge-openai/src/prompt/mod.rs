//! Game prompt composition.

mod game_prompt;

pub use game_prompt::{Difficulty, GamePrompt};
