//! Response types for game generation routes.

use jiff::Timestamp;
use serde::Serialize;

use crate::service::{Game, GameId, GameSummary};

/// Response body for a freshly generated game.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedGame {
    /// Identifier of the stored game.
    pub game_id: GameId,

    /// The trimmed prompt the game was generated from.
    pub prompt: String,

    /// The generated HTML document.
    pub code: String,

    /// Creation timestamp.
    pub created_at: Timestamp,
}

impl From<Game> for GeneratedGame {
    fn from(game: Game) -> Self {
        Self {
            game_id: game.id,
            prompt: game.prompt,
            code: game.code,
            created_at: game.created_at,
        }
    }
}

/// Response body for an improved game.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovedGame {
    /// Identifier of the new game version.
    pub game_id: GameId,

    /// The replacement HTML document.
    pub code: String,

    /// Creation timestamp of the new version.
    pub created_at: Timestamp,
}

impl From<Game> for ImprovedGame {
    fn from(game: Game) -> Self {
        Self {
            game_id: game.id,
            code: game.code,
            created_at: game.created_at,
        }
    }
}

/// Response body listing all generated games.
#[derive(Debug, Clone, Serialize)]
pub struct GameList {
    /// Game summaries in insertion order, without document bodies.
    pub games: Vec<GameSummary>,
}
