//! Game generation, lookup, and improvement handlers.

use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};

use crate::extract::{Json, Path};
use crate::handler::Result;
use crate::handler::request::{GamePathParams, GenerateGame, ImproveGame};
use crate::handler::response::{GameList, GeneratedGame, ImprovedGame};
use crate::service::{Game, GameService, ServiceState};

/// Tracing target for game operations.
const TRACING_TARGET: &str = "playforge_server::handler::games";

/// Generates a new game from a free-text prompt.
///
/// The prompt is validated after trimming; the difficulty defaults to
/// medium when omitted. Blocks on one upstream completion call.
#[tracing::instrument(skip_all, fields(prompt_len = request.prompt.len()))]
async fn generate_game(
    State(game_service): State<GameService>,
    Json(request): Json<GenerateGame>,
) -> Result<Json<GeneratedGame>> {
    tracing::debug!(target: TRACING_TARGET, "New game generation request");

    let difficulty = request.difficulty.unwrap_or_default();
    let game = game_service.create(&request.prompt, difficulty).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        game_id = %game.id,
        "Game generation request served"
    );

    Ok(Json(GeneratedGame::from(game)))
}

/// Returns the full stored game, document included.
#[tracing::instrument(skip_all, fields(game_id = %path_params.game_id))]
async fn get_game(
    State(game_service): State<GameService>,
    Path(path_params): Path<GamePathParams>,
) -> Result<Json<Game>> {
    tracing::debug!(target: TRACING_TARGET, "Reading game");

    let game = game_service.get(path_params.game_id).await?;

    Ok(Json(game))
}

/// Lists summaries of all generated games in insertion order.
#[tracing::instrument(skip_all)]
async fn list_games(
    State(game_service): State<GameService>,
) -> Result<Json<GameList>> {
    let games = game_service.list().await;

    tracing::debug!(
        target: TRACING_TARGET,
        count = games.len(),
        "Games listed"
    );

    Ok(Json(GameList { games }))
}

/// Generates an improved version of an existing game.
///
/// The parent game stays untouched; the response carries the new version.
#[tracing::instrument(skip_all, fields(game_id = %request.game_id))]
async fn improve_game(
    State(game_service): State<GameService>,
    Json(request): Json<ImproveGame>,
) -> Result<Json<ImprovedGame>> {
    tracing::debug!(target: TRACING_TARGET, "Game improvement request");

    let game = game_service
        .improve(request.game_id, &request.improvement_prompt)
        .await?;

    tracing::debug!(
        target: TRACING_TARGET,
        game_id = %game.id,
        "Game improvement request served"
    );

    Ok(Json(ImprovedGame::from(game)))
}

/// Returns a [`Router`] with all game routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/api/game/generate", post(generate_game))
        .route("/api/game/improve", post(improve_game))
        .route("/api/game/{game_id}", get(get_game))
        .route("/api/games", get(list_games))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::handler::test::{failing_test_server, improve_failing_test_server, test_server};

    #[tokio::test]
    async fn generate_game_stores_extracted_document() -> anyhow::Result<()> {
        let server = test_server("```html\n<html>X</html>\n```")?;

        let response = server
            .post("/api/game/generate")
            .json(&json!({"prompt": "snake game", "difficulty": "hard"}))
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert!(body.get("gameId").is_some());
        assert!(body.get("createdAt").is_some());
        assert_eq!(body["prompt"], "snake game");
        assert_eq!(body["code"], "<html>X</html>");

        // The stored game carries the requested difficulty.
        let game_id = body["gameId"].as_str().unwrap();
        let stored = server.get(&format!("/api/game/{game_id}")).await;
        stored.assert_status_ok();
        let stored = stored.json::<Value>();
        assert_eq!(stored["difficulty"], "hard");
        assert_eq!(stored["code"], "<html>X</html>");

        Ok(())
    }

    #[tokio::test]
    async fn generate_game_defaults_to_medium() -> anyhow::Result<()> {
        let server = test_server("<html></html>")?;

        let response = server
            .post("/api/game/generate")
            .json(&json!({"prompt": "pong"}))
            .await;
        response.assert_status_ok();

        let game_id = response.json::<Value>()["gameId"].as_str().unwrap().to_owned();
        let stored = server.get(&format!("/api/game/{game_id}")).await.json::<Value>();
        assert_eq!(stored["difficulty"], "medium");

        Ok(())
    }

    #[tokio::test]
    async fn generate_game_rejects_empty_prompt() -> anyhow::Result<()> {
        let server = test_server("<html></html>")?;

        for prompt in ["", "   "] {
            let response = server
                .post("/api/game/generate")
                .json(&json!({"prompt": prompt}))
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let body = response.json::<Value>();
            assert_eq!(body["error"], "Game prompt is required");
        }

        // Nothing was stored as a side effect.
        let list = server.get("/api/games").await.json::<Value>();
        assert_eq!(list["games"].as_array().unwrap().len(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn generate_game_surfaces_upstream_failure() -> anyhow::Result<()> {
        let server = failing_test_server()?;

        let response = server
            .post("/api/game/generate")
            .json(&json!({"prompt": "snake"}))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.json::<Value>();
        assert_eq!(body["error"], "Failed to generate game");
        assert!(body.get("details").is_some());

        Ok(())
    }

    #[tokio::test]
    async fn get_game_unknown_id_is_404() -> anyhow::Result<()> {
        let server = test_server("<html></html>")?;

        let response = server
            .get("/api/game/00000000-0000-7000-8000-000000000000")
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], "Game not found");

        // A malformed identifier is indistinguishable from an unknown one.
        let response = server.get("/api/game/not-a-real-id").await;
        response.assert_status(StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn list_games_omits_documents_and_keeps_order() -> anyhow::Result<()> {
        let server = test_server("<html></html>")?;

        for prompt in ["first", "second", "third"] {
            server
                .post("/api/game/generate")
                .json(&json!({"prompt": prompt}))
                .await
                .assert_status_ok();
        }

        let body = server.get("/api/games").await.json::<Value>();
        let games = body["games"].as_array().unwrap();

        assert_eq!(games.len(), 3);
        let prompts: Vec<&str> = games.iter().map(|g| g["prompt"].as_str().unwrap()).collect();
        assert_eq!(prompts, vec!["first", "second", "third"]);

        for game in games {
            assert!(game.get("code").is_none());
            assert!(game.get("id").is_some());
            assert!(game.get("difficulty").is_some());
            assert!(game.get("createdAt").is_some());
        }

        Ok(())
    }

    #[tokio::test]
    async fn improve_game_creates_linked_version() -> anyhow::Result<()> {
        let server = test_server("```html\n<html>v1</html>\n```")?;

        let created = server
            .post("/api/game/generate")
            .json(&json!({"prompt": "snake", "difficulty": "hard"}))
            .await
            .json::<Value>();
        let parent_id = created["gameId"].as_str().unwrap();

        let response = server
            .post("/api/game/improve")
            .json(&json!({"gameId": parent_id, "improvementPrompt": "add power-ups"}))
            .await;
        response.assert_status_ok();

        let improved = response.json::<Value>();
        let improved_id = improved["gameId"].as_str().unwrap();
        assert_ne!(improved_id, parent_id);
        assert_eq!(improved["code"], "<html>v1</html>");

        // The new version links back to its parent and records the change.
        let stored = server.get(&format!("/api/game/{improved_id}")).await.json::<Value>();
        assert_eq!(stored["parentId"], parent_id);
        assert_eq!(stored["prompt"], "snake (improved: add power-ups)");
        assert_eq!(stored["difficulty"], "hard");

        // The parent is untouched.
        let parent = server.get(&format!("/api/game/{parent_id}")).await.json::<Value>();
        assert_eq!(parent["code"], created["code"]);
        assert!(parent.get("parentId").is_none());

        Ok(())
    }

    #[tokio::test]
    async fn improve_game_unknown_parent_is_404() -> anyhow::Result<()> {
        let server = test_server("<html></html>")?;

        let response = server
            .post("/api/game/improve")
            .json(&json!({
                "gameId": "00000000-0000-7000-8000-000000000000",
                "improvementPrompt": "add sound"
            }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["error"], "Game not found");

        Ok(())
    }

    #[tokio::test]
    async fn improve_game_surfaces_upstream_failure() -> anyhow::Result<()> {
        let server = improve_failing_test_server("<html></html>")?;

        let created = server
            .post("/api/game/generate")
            .json(&json!({"prompt": "snake"}))
            .await
            .json::<Value>();

        let response = server
            .post("/api/game/improve")
            .json(&json!({
                "gameId": created["gameId"],
                "improvementPrompt": "add sound"
            }))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.json::<Value>();
        assert_eq!(body["error"], "Failed to improve game");
        assert!(body.get("details").is_some());

        Ok(())
    }
}
