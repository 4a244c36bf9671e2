#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use playforge_server::handler::routes;
use playforge_server::middleware::{
    RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt,
};
use playforge_server::service::ServiceState;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Cli, MiddlewareConfig, log_server_config};

/// Tracing target for server startup events.
pub const TRACING_TARGET_SERVER_STARTUP: &str = "playforge_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "playforge_cli::server::shutdown";

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "playforge_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    init_tracing();
    log_startup_info();
    log_server_config(&cli.server);

    cli.server
        .validate()
        .context("invalid server configuration")?;

    cli.middleware.log();

    let service_config = cli
        .service
        .into_service_config()
        .context("invalid service configuration")?;
    let state = ServiceState::from_config(&service_config)
        .context("failed to create service state")?;

    let router = create_router(state, &cli.middleware);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS
/// 4. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, middleware: &MiddlewareConfig) -> Router {
    routes(state)
        .with_security(&middleware.cors)
        .with_observability()
        .with_recovery(&middleware.recovery)
}

/// Initializes tracing with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Logs startup information.
fn log_startup_info() {
    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting playforge server"
    );
}
