//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig         # Host, port, shutdown
//! ├── middleware: MiddlewareConfig # CORS, request timeout
//! └── service: ServiceConfig       # OpenAI credential and model settings
//! ```
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Configure the credential and server
//! playforge --openai-api-key "sk-..." --port 8080
//!
//! # Or via environment variables
//! OPENAI_API_KEY="sk-..." PORT=8080 playforge
//! ```

mod middleware;
mod server;
mod service;

use clap::Parser;
pub use middleware::MiddlewareConfig;
pub use server::{ServerConfig, log_server_config};
pub use service::ServiceConfig;

#[cfg(feature = "dotenv")]
use crate::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
///
/// Combines all configuration groups for the playforge server:
/// - [`ServerConfig`]: network binding and shutdown behavior
/// - [`MiddlewareConfig`]: HTTP middleware (CORS, timeouts)
/// - [`ServiceConfig`]: OpenAI credential and model settings
#[derive(Debug, Clone, Parser)]
#[command(name = "playforge")]
#[command(about = "Playforge game generation server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, timeouts).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// OpenAI credential and model configuration.
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Loads environment variables from a .env file (if enabled) and
    /// parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments so that its
    /// values are visible to the `env` attributes.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from a .env file if the dotenv feature
    /// is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(
                    target: TRACING_TARGET_CONFIG,
                    path = %path.display(),
                    "Loaded environment from .env file"
                );
            }
            Err(err) if err.not_found() => {}
            Err(err) => {
                eprintln!("Warning: failed to load .env file: {err}");
            }
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}
}
