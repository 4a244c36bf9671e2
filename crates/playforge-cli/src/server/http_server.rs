//! HTTP server startup and lifecycle management.

use axum::Router;
use tokio::net::TcpListener;

use super::{Result, ServerError, TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP};
use crate::config::ServerConfig;
use crate::server::shutdown_signal;

/// Starts the HTTP server with graceful shutdown.
///
/// Validates the configuration, binds to the configured address, and
/// serves requests until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, server_config: ServerConfig) -> Result<()> {
    if let Err(validation_error) = server_config.validate() {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = %validation_error,
            "Invalid server configuration"
        );

        return Err(ServerError::InvalidConfig(validation_error.to_string()));
    }

    let addr = server_config.server_addr();
    let listener = TcpListener::bind(addr).await.map_err(|err| {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            addr = %addr,
            error = %err,
            "Failed to bind server address"
        );
        ServerError::Bind(err)
    })?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %addr,
        "Server is ready and listening for connections"
    );

    if server_config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(server_config.shutdown_timeout()))
        .await
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %err,
                "Server encountered an error"
            );
            ServerError::Runtime(err)
        })?;

    tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Server shut down gracefully");
    Ok(())
}
