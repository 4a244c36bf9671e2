//! Server lifecycle errors.

use std::io;

/// A specialized [`Result`] type for server lifecycle operations.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = ServerError> = std::result::Result<T, E>;

/// The error type for server startup and runtime failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The server configuration failed validation.
    #[error("invalid server configuration: {0}")]
    InvalidConfig(String),

    /// The listen address could not be bound.
    #[error("failed to bind server address: {0}")]
    Bind(#[source] io::Error),

    /// The server failed while running.
    #[error("server runtime error: {0}")]
    Runtime(#[source] io::Error),
}
