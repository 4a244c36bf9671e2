//! Error response body shared by every failing route.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// HTTP error response representation.
///
/// Every failure returns this shape: an `error` summary the client can
/// show, and optionally a `details` string carrying the underlying cause.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse<'a> {
    /// User-facing error summary.
    pub error: Cow<'a, str>,

    /// Underlying cause, where one is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Cow<'a, str>>,

    /// HTTP status code (not serialized in JSON).
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new("Invalid request data", StatusCode::BAD_REQUEST);
    pub const NOT_FOUND: Self = Self::new("Resource not found", StatusCode::NOT_FOUND);

    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "Internal server error",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const UPSTREAM_ERROR: Self = Self::new(
        "Game generation service failed",
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    /// Creates a new response with the given summary and status code.
    const fn new(error: &'a str, status: StatusCode) -> Self {
        Self {
            error: Cow::Borrowed(error),
            details: None,
            status,
        }
    }

    /// Replaces the error summary.
    pub fn with_error(self, error: impl Into<Cow<'a, str>>) -> Self {
        Self {
            error: error.into(),
            ..self
        }
    }

    /// Attaches the underlying cause.
    pub fn with_details(self, details: impl Into<Cow<'a, str>>) -> Self {
        Self {
            details: Some(details.into()),
            ..self
        }
    }
}

impl IntoResponse for ErrorResponse<'_> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
