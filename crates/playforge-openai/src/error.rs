//! Error types for completion API operations.
//!
//! Covers the failure modes of a single completion exchange: transport
//! problems, authentication rejections, non-success API statuses, and
//! responses that carry no usable document.

use std::time::Duration;

/// A specialized [`Result`] type for completion operations.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type for completion API operations.
///
/// There is no retry machinery attached to any of these variants: every
/// failure is surfaced to the caller as-is, together with the underlying
/// cause where one exists.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API returned a non-success status.
    #[error("completion API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body or status description.
        message: String,
    },

    /// The API rejected the configured credential.
    #[error("completion API authentication failed: {message}")]
    Auth {
        /// Details from the rejection response.
        message: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("completion transport error: {source}")]
    Network {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout.
    #[error("completion request timed out after {timeout:?}")]
    Timeout {
        /// The configured request timeout.
        timeout: Duration,
    },

    /// The response body could not be interpreted.
    #[error("unusable completion response: {message}")]
    InvalidResponse {
        /// Description of what was missing or malformed.
        message: String,
    },

    /// The model produced a completion with no document in it.
    #[error("completion contained no document")]
    EmptyCompletion,

    /// The client configuration is invalid.
    #[error("invalid client configuration: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidResponse`] with the given message.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Creates an [`Error::Config`] with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns true if this error came from the transport layer.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    /// Returns true if this error is an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Returns the HTTP status code if the API reported one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
