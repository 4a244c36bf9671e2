//! Deterministic prompt composition for game generation and improvement.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::completion::Message;

/// System-level instruction set for the game generator.
///
/// Describes the required output structure: one complete standalone HTML
/// file with inline CSS and JavaScript, a title, instructions, score
/// tracking, responsive controls, and nothing but the HTML in the reply.
const SYSTEM_PROMPT: &str = r#"You are an expert HTML5 game developer. Generate complete, playable browser games using only HTML, CSS, and vanilla JavaScript.

REQUIREMENTS:
- Create a COMPLETE, SELF-CONTAINED HTML file with inline CSS and JavaScript
- The game MUST be fully functional and playable immediately
- Use HTML5 Canvas for rendering when appropriate
- Include clear instructions on how to play
- Add score/level tracking when relevant
- Make it visually appealing with good CSS styling
- Ensure responsive controls (keyboard/mouse/touch when possible)
- No external libraries or dependencies
- All code in ONE file
- Include a title, game area, and controls section

IMPORTANT:
- Return ONLY the HTML code, no explanations
- Make the game immediately playable
- Ensure code is bug-free and complete
- Add color and visual polish"#;

/// Requested difficulty of a generated game.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Forgiving pacing, simple mechanics.
    Easy,
    /// The default when the caller does not specify one.
    #[default]
    Medium,
    /// Fast pacing, punishing mechanics.
    Hard,
}

/// Composer for the system/user message pairs sent to the model.
///
/// Pure and deterministic: the same inputs always produce the same texts,
/// and composition performs no I/O.
#[derive(Debug, Default, Clone)]
pub struct GamePrompt;

impl GamePrompt {
    /// Creates a new prompt composer.
    pub fn new() -> Self {
        Self
    }

    /// Returns the fixed system-level instruction set.
    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    /// Builds the per-request instruction for generating a new game.
    pub fn generation_instruction(&self, description: &str, difficulty: Difficulty) -> String {
        format!(
            "Create a fun, playable {difficulty} difficulty game: {description}\n\n\
             Requirements:\n\
             - Make it visually appealing with modern CSS\n\
             - Include smooth animations\n\
             - Add sound effects using Web Audio API if appropriate\n\
             - Make controls intuitive\n\
             - Include a game over/win state\n\
             - Add a restart button\n\n\
             Generate the complete HTML file now."
        )
    }

    /// Builds the per-request instruction for improving an existing game.
    ///
    /// Embeds the current document verbatim and asks for a complete
    /// replacement reflecting the requested change.
    pub fn improvement_instruction(&self, current_code: &str, change: &str) -> String {
        format!(
            "Here's the current game code:\n\n{current_code}\n\n\
             Improve it based on this request: {change}\n\n\
             Return the complete updated HTML file."
        )
    }

    /// Composes the message pair for a generation request.
    pub fn generation_messages(&self, description: &str, difficulty: Difficulty) -> Vec<Message> {
        vec![
            Message::system(self.system_prompt()),
            Message::user(self.generation_instruction(description, difficulty)),
        ]
    }

    /// Composes the message pair for an improvement request.
    pub fn improvement_messages(&self, current_code: &str, change: &str) -> Vec<Message> {
        vec![
            Message::system(self.system_prompt()),
            Message::user(self.improvement_instruction(current_code, change)),
        ]
    }
}
