//! HTTP middleware applied around the route handlers.
//!
//! Each concern is exposed as an extension trait on `axum::`[`Router`] so
//! the binary can layer them in a fixed order: recovery outermost, then
//! observability, then security, then the routes themselves.
//!
//! [`Router`]: axum::routing::Router

mod observability;
mod recovery;
mod security;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{CorsConfig, RouterSecurityExt};
