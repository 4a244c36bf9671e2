//! In-memory game storage.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use jiff::Timestamp;
use playforge_openai::Difficulty;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Opaque identifier of a stored game.
///
/// UUIDv7: millisecond-ordered with random tail bits, so identifiers are
/// practically unique for the store's lifetime and sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A stored, immutable generated game.
///
/// Once inserted, none of these fields ever change; improvement produces a
/// new [`Game`] referencing this one through `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique identifier, fixed at creation.
    pub id: GameId,

    /// The trimmed source prompt; for improved games this records the
    /// original description plus the applied change.
    pub prompt: String,

    /// Requested difficulty; inherited from the parent on improvement.
    pub difficulty: Difficulty,

    /// The generated self-contained HTML document.
    pub code: String,

    /// The game this one improves upon, absent for originals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<GameId>,

    /// Creation timestamp.
    pub created_at: Timestamp,
}

/// Summary of a stored game, without the document body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Unique identifier.
    pub id: GameId,

    /// The recorded source prompt.
    pub prompt: String,

    /// Requested difficulty.
    pub difficulty: Difficulty,

    /// Creation timestamp.
    pub created_at: Timestamp,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            prompt: game.prompt.clone(),
            difficulty: game.difficulty,
            created_at: game.created_at,
        }
    }
}

/// Process-lifetime, insertion-ordered store of generated games.
///
/// The store exclusively owns every [`Game`]; callers only ever receive
/// clones of fully constructed values. Retention is unbounded for the
/// process lifetime: games are never evicted or deleted.
#[derive(Debug, Default, Clone)]
pub struct GameStore {
    games: Arc<RwLock<IndexMap<GameId, Game>>>,
}

impl GameStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a fully constructed game.
    ///
    /// The write lock is held only for the insert itself, after the game
    /// has been completely built; a concurrent reader can never observe a
    /// partially constructed entry.
    pub async fn insert(&self, game: Game) {
        let mut games = self.games.write().await;
        games.insert(game.id, game);
    }

    /// Returns a clone of the game with the given id, if present.
    pub async fn get(&self, id: GameId) -> Option<Game> {
        let games = self.games.read().await;
        games.get(&id).cloned()
    }

    /// Returns true if a game with the given id exists.
    pub async fn contains(&self, id: GameId) -> bool {
        let games = self.games.read().await;
        games.contains_key(&id)
    }

    /// Returns summaries of all games in insertion order.
    pub async fn summaries(&self) -> Vec<GameSummary> {
        let games = self.games.read().await;
        games.values().map(GameSummary::from).collect()
    }

    /// Returns the number of stored games.
    pub async fn count(&self) -> usize {
        let games = self.games.read().await;
        games.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game(prompt: &str) -> Game {
        Game {
            id: GameId::new(),
            prompt: prompt.to_owned(),
            difficulty: Difficulty::Medium,
            code: "<html></html>".to_owned(),
            parent_id: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn game_ids_are_unique() {
        let ids: Vec<GameId> = (0..128).map(|_| GameId::new()).collect();
        let mut deduped = ids.clone();
        deduped.sort_by_key(|id| id.to_string());
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[tokio::test]
    async fn insert_then_get_returns_equal_game() {
        let store = GameStore::new();
        let game = sample_game("snake");

        store.insert(game.clone()).await;

        assert_eq!(store.get(game.id).await, Some(game));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn get_unknown_id_returns_none() {
        let store = GameStore::new();
        assert_eq!(store.get(GameId::new()).await, None);
        assert!(!store.contains(GameId::new()).await);
    }

    #[tokio::test]
    async fn summaries_preserve_insertion_order() {
        let store = GameStore::new();
        let first = sample_game("first");
        let second = sample_game("second");
        let third = sample_game("third");

        store.insert(first.clone()).await;
        store.insert(second.clone()).await;
        store.insert(third.clone()).await;

        let summaries = store.summaries().await;
        let prompts: Vec<&str> = summaries.iter().map(|s| s.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn summaries_omit_document_body() {
        let store = GameStore::new();
        store.insert(sample_game("pong")).await;

        let summaries = store.summaries().await;
        let json = serde_json::to_value(&summaries).unwrap();

        assert!(json[0].get("code").is_none());
        assert_eq!(json[0]["prompt"], "pong");
    }

    #[test]
    fn game_serializes_camel_case() {
        let mut game = sample_game("tetris");
        game.parent_id = Some(GameId::new());

        let json = serde_json::to_value(&game).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("parentId").is_some());
        assert!(json.get("parent_id").is_none());
    }

    #[test]
    fn original_game_omits_parent_id() {
        let json = serde_json::to_value(sample_game("pong")).unwrap();
        assert!(json.get("parentId").is_none());
    }
}
