//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use playforge_server::handler::routes;
//! use playforge_server::service::{ServiceConfig, ServiceState};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ServiceConfig::builder()
//!     .with_openai_api_key("sk-your-key")
//!     .build()?;
//! let state = ServiceState::from_config(&config)?;
//!
//! let router = routes(state);
//! # Ok(())
//! # }
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod games;
mod monitors;
pub mod request;
pub mod response;

use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all routes and the given state applied.
pub fn routes(state: ServiceState) -> Router {
    Router::new()
        .merge(games::routes())
        .merge(monitors::routes())
        .fallback(handler)
        .with_state(state)
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use axum_test::TestServer;

    use crate::handler::routes;
    use crate::service::ServiceState;
    use crate::service::games::stub::StubCodegen;

    /// Returns a new [`TestServer`] whose "model" replies with `raw_output`.
    pub fn test_server(raw_output: &str) -> anyhow::Result<TestServer> {
        let state = ServiceState::with_codegen(Arc::new(StubCodegen::replying(raw_output)));
        Ok(TestServer::new(routes(state))?)
    }

    /// Returns a new [`TestServer`] whose model calls always fail.
    pub fn failing_test_server() -> anyhow::Result<TestServer> {
        let state = ServiceState::with_codegen(Arc::new(StubCodegen::failing()));
        Ok(TestServer::new(routes(state))?)
    }

    /// Returns a new [`TestServer`] that generates fine but fails to improve.
    pub fn improve_failing_test_server(raw_output: &str) -> anyhow::Result<TestServer> {
        let codegen = StubCodegen::replying(raw_output).with_failing_improve();
        let state = ServiceState::with_codegen(Arc::new(codegen));
        Ok(TestServer::new(routes(state))?)
    }

    #[tokio::test]
    async fn unknown_routes_fall_back_to_404() -> anyhow::Result<()> {
        let server = test_server("<html></html>")?;

        let response = server.get("/api/unknown").await;
        response.assert_status_not_found();

        Ok(())
    }
}
