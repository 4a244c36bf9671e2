//! Game generation orchestration.

use std::sync::Arc;

use jiff::Timestamp;
use playforge_openai::{Difficulty, GameCodegen};

use super::store::{Game, GameId, GameStore, GameSummary};

/// Tracing target for game service operations.
const TRACING_TARGET: &str = "playforge_server::service::games";

/// The error type for game service operations.
#[derive(Debug, thiserror::Error)]
pub enum GameServiceError {
    /// Required input was empty or missing.
    #[error("{message}")]
    Validation {
        /// User-correctable description of the problem.
        message: String,
    },

    /// No game exists under the given identifier.
    #[error("game {id} not found")]
    NotFound {
        /// The unknown identifier.
        id: GameId,
    },

    /// The model call for a new game failed or returned unusable content.
    #[error("game generation failed: {source}")]
    Generation {
        /// The upstream failure.
        #[source]
        source: playforge_openai::Error,
    },

    /// The model call for an improvement failed or returned unusable content.
    #[error("game improvement failed: {source}")]
    Improvement {
        /// The upstream failure.
        #[source]
        source: playforge_openai::Error,
    },
}

impl GameServiceError {
    /// Creates a [`GameServiceError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// The stateful core of the service: identifier generation, in-memory
/// persistence, and the user-facing create/improve/get/list operations.
///
/// Stored games are immutable; every operation either inserts a new fully
/// constructed [`Game`] or reads existing ones. Upstream failures surface
/// immediately — there is no retry and no partial insert.
#[derive(Clone)]
pub struct GameService {
    codegen: Arc<dyn GameCodegen>,
    store: GameStore,
}

impl GameService {
    /// Creates a new service over the given codegen backend and store.
    pub fn new(codegen: Arc<dyn GameCodegen>, store: GameStore) -> Self {
        Self { codegen, store }
    }

    /// Generates a new game from a free-text description.
    ///
    /// The description is trimmed before use; an empty result fails with
    /// [`GameServiceError::Validation`] and nothing is stored.
    pub async fn create(
        &self,
        description: &str,
        difficulty: Difficulty,
    ) -> Result<Game, GameServiceError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(GameServiceError::validation("Game prompt is required"));
        }

        tracing::info!(
            target: TRACING_TARGET,
            %difficulty,
            prompt = %description,
            "Generating new game"
        );

        let document = self
            .codegen
            .generate(description, difficulty)
            .await
            .map_err(|source| GameServiceError::Generation { source })?;

        let game = Game {
            id: GameId::new(),
            prompt: description.to_owned(),
            difficulty,
            code: document.html,
            parent_id: None,
            created_at: Timestamp::now(),
        };

        self.store.insert(game.clone()).await;

        let games_stored = self.store.count().await;
        tracing::info!(
            target: TRACING_TARGET,
            game_id = %game.id,
            games_stored,
            "Game generated successfully"
        );

        Ok(game)
    }

    /// Generates an improved version of an existing game.
    ///
    /// The parent is never modified; the improved game records the parent
    /// identifier, inherits its difficulty, and appends the applied change
    /// to the recorded prompt.
    pub async fn improve(
        &self,
        parent_id: GameId,
        change: &str,
    ) -> Result<Game, GameServiceError> {
        let parent = self
            .store
            .get(parent_id)
            .await
            .ok_or(GameServiceError::NotFound { id: parent_id })?;

        let change = change.trim();
        if change.is_empty() {
            return Err(GameServiceError::validation("Improvement prompt is required"));
        }

        tracing::info!(
            target: TRACING_TARGET,
            game_id = %parent_id,
            change = %change,
            "Improving game"
        );

        let document = self
            .codegen
            .improve(&parent.code, change)
            .await
            .map_err(|source| GameServiceError::Improvement { source })?;

        let game = Game {
            id: GameId::new(),
            prompt: format!("{} (improved: {})", parent.prompt, change),
            difficulty: parent.difficulty,
            code: document.html,
            parent_id: Some(parent_id),
            created_at: Timestamp::now(),
        };

        self.store.insert(game.clone()).await;

        tracing::info!(
            target: TRACING_TARGET,
            game_id = %game.id,
            parent_id = %parent_id,
            "Game improved successfully"
        );

        Ok(game)
    }

    /// Returns the game with the given identifier.
    pub async fn get(&self, id: GameId) -> Result<Game, GameServiceError> {
        self.store
            .get(id)
            .await
            .ok_or(GameServiceError::NotFound { id })
    }

    /// Returns summaries of all games in insertion order.
    pub async fn list(&self) -> Vec<GameSummary> {
        self.store.summaries().await
    }

    /// Returns the number of games generated so far.
    pub async fn count(&self) -> usize {
        self.store.count().await
    }
}

impl std::fmt::Debug for GameService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

/// Stub codegen backend for tests.
#[cfg(test)]
pub(crate) mod stub {
    use async_trait::async_trait;
    use playforge_openai::{
        Difficulty, Error, GameCodegen, GeneratedDocument, Result, extract_html,
    };

    /// A [`GameCodegen`] whose "model" replies with a canned text.
    ///
    /// Mirrors the production pipeline by running the canned reply through
    /// the fence extractor, so tests exercise extraction end to end.
    #[derive(Debug, Clone)]
    pub(crate) struct StubCodegen {
        raw_output: String,
        generate_fails: bool,
        improve_fails: bool,
    }

    impl StubCodegen {
        pub(crate) fn replying(raw_output: impl Into<String>) -> Self {
            Self {
                raw_output: raw_output.into(),
                generate_fails: false,
                improve_fails: false,
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                raw_output: String::new(),
                generate_fails: true,
                improve_fails: true,
            }
        }

        pub(crate) fn with_failing_improve(mut self) -> Self {
            self.improve_fails = true;
            self
        }

        fn reply(&self, fails: bool) -> Result<GeneratedDocument> {
            if fails {
                return Err(Error::Api {
                    status: 500,
                    message: "model unavailable".to_owned(),
                });
            }

            let html = extract_html(&self.raw_output);
            if html.is_empty() {
                return Err(Error::EmptyCompletion);
            }

            Ok(GeneratedDocument { html, usage: None })
        }
    }

    #[async_trait]
    impl GameCodegen for StubCodegen {
        async fn generate(
            &self,
            _description: &str,
            _difficulty: Difficulty,
        ) -> Result<GeneratedDocument> {
            self.reply(self.generate_fails)
        }

        async fn improve(&self, _current_code: &str, _change: &str) -> Result<GeneratedDocument> {
            self.reply(self.improve_fails)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stub::StubCodegen;
    use super::*;

    fn service_with(codegen: StubCodegen) -> GameService {
        GameService::new(Arc::new(codegen), GameStore::new())
    }

    #[tokio::test]
    async fn create_stores_trimmed_prompt_and_unique_ids() {
        let service = service_with(StubCodegen::replying("```html\n<html>X</html>\n```"));

        let first = service.create("  snake game  ", Difficulty::Hard).await.unwrap();
        let second = service.create("pong", Difficulty::Easy).await.unwrap();

        assert_eq!(first.prompt, "snake game");
        assert_eq!(first.difficulty, Difficulty::Hard);
        assert_eq!(first.code, "<html>X</html>");
        assert!(first.parent_id.is_none());
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn create_rejects_empty_descriptions() {
        let service = service_with(StubCodegen::replying("<html></html>"));

        for input in ["", "   "] {
            let error = service.create(input, Difficulty::Medium).await.unwrap_err();
            assert!(matches!(error, GameServiceError::Validation { .. }));
        }

        assert_eq!(service.count().await, 0);
    }

    #[tokio::test]
    async fn create_surfaces_upstream_failure_without_side_effects() {
        let service = service_with(StubCodegen::failing());

        let error = service.create("snake", Difficulty::Medium).await.unwrap_err();

        assert!(matches!(error, GameServiceError::Generation { .. }));
        assert_eq!(service.count().await, 0);
    }

    #[tokio::test]
    async fn empty_extracted_document_is_an_upstream_failure() {
        let service = service_with(StubCodegen::replying("   "));

        let error = service.create("snake", Difficulty::Medium).await.unwrap_err();

        assert!(matches!(
            error,
            GameServiceError::Generation {
                source: playforge_openai::Error::EmptyCompletion
            }
        ));
        assert_eq!(service.count().await, 0);
    }

    #[tokio::test]
    async fn get_after_create_returns_equal_game() {
        let service = service_with(StubCodegen::replying("<html>Y</html>"));

        let created = service.create("breakout", Difficulty::Medium).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn improve_unknown_id_fails_and_store_unchanged() {
        let service = service_with(StubCodegen::replying("<html></html>"));
        service.create("snake", Difficulty::Medium).await.unwrap();

        let error = service.improve(GameId::new(), "add sound").await.unwrap_err();

        assert!(matches!(error, GameServiceError::NotFound { .. }));
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn improve_links_parent_and_leaves_it_unchanged() {
        let service = service_with(StubCodegen::replying("```html\n<html>v1</html>\n```"));
        let parent = service.create("snake", Difficulty::Hard).await.unwrap();

        let improved = service.improve(parent.id, "add power-ups").await.unwrap();

        assert_eq!(improved.parent_id, Some(parent.id));
        assert_eq!(improved.difficulty, Difficulty::Hard);
        assert_eq!(improved.prompt, "snake (improved: add power-ups)");
        assert_ne!(improved.id, parent.id);

        let parent_after = service.get(parent.id).await.unwrap();
        assert_eq!(parent_after.code, parent.code);
        assert_eq!(parent_after, parent);
    }

    #[tokio::test]
    async fn improve_rejects_empty_change() {
        let service = service_with(StubCodegen::replying("<html></html>"));
        let parent = service.create("snake", Difficulty::Medium).await.unwrap();

        let error = service.improve(parent.id, "  ").await.unwrap_err();

        assert!(matches!(error, GameServiceError::Validation { .. }));
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn list_reflects_every_creation_exactly_once() {
        let service = service_with(StubCodegen::replying("<html></html>"));

        let first = service.create("one", Difficulty::Easy).await.unwrap();
        let second = service.create("two", Difficulty::Medium).await.unwrap();
        let third = service.improve(first.id, "polish").await.unwrap();

        let summaries = service.list().await;
        let ids: Vec<GameId> = summaries.iter().map(|s| s.id).collect();

        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }
}
