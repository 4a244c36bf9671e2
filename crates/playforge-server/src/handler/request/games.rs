//! Request types for game generation routes.

use playforge_openai::Difficulty;
use serde::Deserialize;

use crate::service::GameId;

/// Request body for generating a new game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateGame {
    /// Free-text description of the game to generate.
    pub prompt: String,

    /// Requested difficulty; defaults to medium when omitted.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// Request body for improving an existing game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveGame {
    /// Identifier of the game to improve.
    pub game_id: GameId,

    /// Description of the requested change.
    pub improvement_prompt: String,
}

/// Path parameters for single-game routes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GamePathParams {
    /// Identifier of the requested game.
    pub game_id: GameId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_game_difficulty_is_optional() {
        let request: GenerateGame = serde_json::from_str(r#"{"prompt": "snake"}"#).unwrap();
        assert_eq!(request.prompt, "snake");
        assert!(request.difficulty.is_none());

        let request: GenerateGame =
            serde_json::from_str(r#"{"prompt": "snake", "difficulty": "hard"}"#).unwrap();
        assert_eq!(request.difficulty, Some(Difficulty::Hard));
    }

    #[test]
    fn improve_game_uses_camel_case_keys() {
        let id = GameId::new();
        let json = format!(r#"{{"gameId": "{id}", "improvementPrompt": "add sound"}}"#);

        let request: ImproveGame = serde_json::from_str(&json).unwrap();
        assert_eq!(request.game_id, id);
        assert_eq!(request.improvement_prompt, "add sound");
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let result: Result<GenerateGame, _> =
            serde_json::from_str(r#"{"prompt": "snake", "difficulty": "impossible"}"#);
        assert!(result.is_err());
    }
}
