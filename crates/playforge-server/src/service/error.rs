//! Service initialization errors.

/// A specialized [`Result`] type for service initialization.
///
/// [`Result`]: std::result::Result
pub type Result<T, E = ServiceError> = std::result::Result<T, E>;

/// The error type for service construction.
///
/// These are startup failures: the process must refuse to accept traffic
/// when any of them occurs.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The service configuration is invalid.
    #[error("invalid service configuration: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },

    /// A service component could not be initialized.
    #[error("failed to initialize {component}: {source}")]
    Init {
        /// The component that failed.
        component: &'static str,
        /// The underlying failure.
        #[source]
        source: playforge_openai::Error,
    },
}

impl ServiceError {
    /// Creates a [`ServiceError::Config`] with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
