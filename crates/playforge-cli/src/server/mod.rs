//! HTTP server startup with lifecycle management.
//!
//! Provides a small API for serving the router with graceful shutdown on
//! SIGINT/SIGTERM and structured error reporting.

/// Tracing target for server startup events.
pub const TRACING_TARGET_STARTUP: &str = "playforge_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SHUTDOWN: &str = "playforge_cli::server::shutdown";

mod error;
mod http_server;
mod shutdown;

pub use error::{Result, ServerError};
pub use http_server::serve;
use shutdown::shutdown_signal;
