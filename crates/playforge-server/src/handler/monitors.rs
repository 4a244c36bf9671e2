//! Service health monitoring handlers.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use jiff::Timestamp;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::HealthStatus;
use crate::service::{GameService, ServiceState};

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "playforge_server::handler::monitors";

/// Reports service health and the number of games generated so far.
///
/// The service has no external dependency to probe besides the model
/// provider, and probing that costs money; answering at all means the
/// process is serving.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(game_service): State<GameService>,
) -> Result<Json<HealthStatus>> {
    let games_generated = game_service.count().await;

    tracing::debug!(
        target: TRACING_TARGET,
        games_generated,
        "Health status check"
    );

    Ok(Json(HealthStatus {
        status: "ok",
        timestamp: Timestamp::now(),
        games_generated,
    }))
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/api/health", get(health_status))
}
