//! Game service error to HTTP error conversion.

use super::http_error::{Error as HttpError, ErrorKind};
use crate::service::GameServiceError;

/// Tracing target for service error conversions.
const TRACING_TARGET: &str = "playforge_server::handler::service";

impl From<GameServiceError> for HttpError<'static> {
    fn from(error: GameServiceError) -> Self {
        match error {
            GameServiceError::Validation { message } => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    message = %message,
                    "Request rejected with invalid input"
                );

                ErrorKind::BadRequest.with_message(message)
            }
            GameServiceError::NotFound { id } => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    game_id = %id,
                    "Unknown game identifier"
                );

                ErrorKind::NotFound.with_message("Game not found")
            }
            GameServiceError::Generation { source } => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %source,
                    "Game generation failed"
                );

                ErrorKind::UpstreamError
                    .with_message("Failed to generate game")
                    .with_details(source.to_string())
            }
            GameServiceError::Improvement { source } => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %source,
                    "Game improvement failed"
                );

                ErrorKind::UpstreamError
                    .with_message("Failed to improve game")
                    .with_details(source.to_string())
            }
        }
    }
}
