//! Middleware configuration for the HTTP server.
//!
//! Groups the CORS and recovery settings re-exported from
//! `playforge-server`, all configurable via CLI arguments or environment
//! variables.
//!
//! # Example
//!
//! ```bash
//! # Configure CORS origins and request timeout
//! playforge --cors-allowed-origins "https://playforge.dev" --request-timeout 120
//! ```

use clap::Args;
use playforge_server::middleware::{CorsConfig, RecoveryConfig};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Middleware configuration combining CORS and recovery settings.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// Recovery middleware configuration (request timeout, panics).
    #[clap(flatten)]
    pub recovery: RecoveryConfig,
}

impl MiddlewareConfig {
    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.effective_origins(),
            origin_suffixes = ?self.cors.allowed_origin_suffixes,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            request_timeout_secs = self.recovery.request_timeout,
            "Recovery configuration"
        );
    }
}
