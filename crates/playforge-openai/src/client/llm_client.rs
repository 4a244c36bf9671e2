//! Completion API client implementation.

use std::fmt;
use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{self, HeaderMap, HeaderValue};

use super::llm_config::LlmConfig;
use crate::completion::{ChatRequest, ChatResponse};
use crate::{Error, Result, TRACING_TARGET_CLIENT};

/// Chat-completions API client.
///
/// A thin, shareable wrapper over [`reqwest::Client`] configured for a
/// single OpenAI-compatible endpoint. Cloning is cheap; all clones share
/// one connection pool.
///
/// The client performs exactly one attempt per call: there is no retry,
/// and an in-flight request cannot be cancelled once dispatched — it runs
/// to completion or to the configured timeout.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    /// Creates a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built or
    /// the API key is not a valid header value.
    pub fn new(config: LlmConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = config.effective_base_url(),
            model = config.effective_model(),
            timeout_secs = config.effective_request_timeout().as_secs(),
            "Building completion client from configuration"
        );

        let mut auth_value = HeaderValue::try_from(format!("Bearer {}", config.api_key()))
            .map_err(|_| Error::config("API key contains invalid header characters"))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth_value);
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.effective_request_timeout())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            "Completion client initialized successfully"
        );

        Ok(Self {
            inner: Arc::new(ClientInner { http, config }),
        })
    }

    /// Creates a new client from an API key with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the client cannot be built.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
        let config = LlmConfig::builder()
            .with_api_key(api_key)
            .build()
            .map_err(|e| Error::config(e.to_string()))?;
        Self::new(config)
    }

    /// Sends a chat completion request and returns the parsed response.
    ///
    /// # Errors
    ///
    /// - [`Error::Timeout`] if the request exceeds the configured timeout
    /// - [`Error::Network`] for transport failures
    /// - [`Error::Auth`] if the API rejects the credential
    /// - [`Error::Api`] for any other non-success status
    /// - [`Error::InvalidResponse`] if the body cannot be deserialized
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.inner.config.effective_base_url());

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .inner
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| self.classify_send_error(source))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, body));
        }

        let completion = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| Error::invalid_response(format!("malformed completion body: {e}")))?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            total_tokens = completion.usage.as_ref().map(|u| u.total_tokens),
            "Chat completion request finished"
        );

        Ok(completion)
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &LlmConfig {
        &self.inner.config
    }

    fn classify_send_error(&self, source: reqwest::Error) -> Error {
        if source.is_timeout() {
            Error::Timeout {
                timeout: self.inner.config.effective_request_timeout(),
            }
        } else {
            Error::Network { source }
        }
    }

    fn status_error(status: StatusCode, body: String) -> Error {
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_owned()
        } else {
            body
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Auth { message },
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmClient")
            .field("base_url", &self.inner.config.effective_base_url())
            .field("model", &self.inner.config.effective_model())
            .field("api_key", &self.inner.config.masked_api_key())
            .finish()
    }
}
