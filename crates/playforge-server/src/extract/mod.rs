//! HTTP request extractors whose rejections render the standard error body.
//!
//! Drop-in replacements for [`axum::Json`] and [`axum::extract::Path`]
//! that map extraction failures into the handler [`Error`] type, so a
//! malformed body or path parameter produces the same `{error, details}`
//! shape as every other failure.
//!
//! [`Error`]: crate::handler::Error

mod reject;

pub use reject::{Json, Path};
