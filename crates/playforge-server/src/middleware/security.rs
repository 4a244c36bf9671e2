//! CORS (Cross-Origin Resource Sharing) middleware configuration.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS (Cross-Origin Resource Sharing) configuration.
///
/// Requests are accepted from the explicitly configured origins plus any
/// origin whose host matches one of the configured wildcard suffixes
/// (the hosting provider's preview deployments).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct CorsConfig {
    /// List of allowed CORS origins.
    /// If empty, defaults to localhost origins for development.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_ALLOWED_ORIGINS", value_delimiter = ',')
    )]
    pub allowed_origins: Vec<String>,

    /// Host suffixes accepted from any subdomain, e.g. `.vercel.app`.
    #[cfg_attr(
        feature = "config",
        arg(
            long,
            env = "CORS_ALLOWED_ORIGIN_SUFFIXES",
            value_delimiter = ',',
            default_value = ".vercel.app"
        )
    )]
    pub allowed_origin_suffixes: Vec<String>,

    /// Maximum age for CORS preflight requests in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_MAX_AGE", default_value = "3600")
    )]
    pub max_age_seconds: u64,

    /// Whether to allow credentials in CORS requests.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "CORS_ALLOW_CREDENTIALS", default_value = "true")
    )]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            allowed_origin_suffixes: vec![".vercel.app".to_string()],
            max_age_seconds: 3600,
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Returns the CORS max age as a Duration.
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_seconds)
    }

    /// Returns localhost origins for development.
    pub fn localhost_origins() -> Vec<String> {
        vec![
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(), // Vite default
            "http://127.0.0.1:3000".to_string(),
            "http://127.0.0.1:5173".to_string(),
        ]
    }

    /// Returns the effective origin list (considering defaults).
    pub fn effective_origins(&self) -> Vec<String> {
        if self.allowed_origins.is_empty() {
            Self::localhost_origins()
        } else {
            self.allowed_origins.clone()
        }
    }

    /// Returns true if the given `Origin` header value is allowed.
    ///
    /// An origin is allowed when it equals one of the configured origins,
    /// or when it is an http(s) origin whose host ends with one of the
    /// configured suffixes (with at least one label before the suffix).
    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        if self.effective_origins().iter().any(|o| o == origin) {
            return true;
        }

        let host = origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("http://"));

        match host {
            Some(host) if !host.is_empty() && !host.contains('/') => self
                .allowed_origin_suffixes
                .iter()
                .any(|suffix| host.ends_with(suffix.as_str()) && host.len() > suffix.len()),
            _ => false,
        }
    }

    /// Builds the origin predicate for the CORS layer.
    fn to_allow_origin(&self) -> AllowOrigin {
        let config = self.clone();
        AllowOrigin::predicate(move |origin: &HeaderValue, _| {
            origin
                .to_str()
                .is_ok_and(|origin| config.is_allowed_origin(origin))
        })
    }
}

/// Creates a CORS layer based on the provided configuration.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.to_allow_origin())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(config.allow_credentials)
        .max_age(config.max_age())
}

/// Extension trait for `axum::`[`Router`] to apply security middleware.
///
/// [`Router`]: axum::routing::Router
pub trait RouterSecurityExt<S> {
    /// Layers the CORS middleware with the provided configuration.
    fn with_security(self, cors: &CorsConfig) -> Self;

    /// Layers the CORS middleware with default configuration.
    fn with_default_security(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, cors: &CorsConfig) -> Self {
        self.layer(create_cors_layer(cors))
    }

    fn with_default_security(self) -> Self {
        self.with_security(&CorsConfig::default())
    }
}
