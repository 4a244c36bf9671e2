//! Configuration types for the completion API client.

use std::time::Duration;

use derive_builder::Builder;

/// Default values for configuration options.
mod defaults {
    /// OpenAI API base URL.
    pub const BASE_URL: &str = "https://api.openai.com/v1";

    /// Default model for completions.
    pub const MODEL: &str = "gpt-4o";

    /// Default maximum tokens for a generated document.
    pub const MAX_TOKENS: u32 = 4000;

    /// Default sampling temperature.
    pub const TEMPERATURE: f32 = 0.7;

    /// Default request timeout in seconds.
    ///
    /// Generation of a complete document is slow; this bounds how long a
    /// single completion call may run before the client gives up waiting.
    pub const REQUEST_TIMEOUT_SECS: u64 = 120;
}

/// Validates the [`LlmConfig`] before building.
fn validate_config(builder: &LlmConfigBuilder) -> std::result::Result<(), String> {
    if let Some(api_key) = &builder.api_key
        && api_key.is_empty()
    {
        return Err("API key cannot be empty".to_string());
    }

    if let Some(Some(base_url)) = &builder.base_url {
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(format!(
                "Base URL must start with http:// or https://, got {}",
                base_url
            ));
        }
    }

    if let Some(Some(temperature)) = builder.temperature {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                temperature
            ));
        }
    }

    if let Some(Some(max_tokens)) = builder.max_tokens {
        if max_tokens == 0 {
            return Err("Max tokens must be greater than 0".to_string());
        }
    }

    if let Some(Some(timeout)) = builder.request_timeout {
        if timeout.is_zero() {
            return Err("Request timeout must be greater than 0".to_string());
        }
    }

    Ok(())
}

/// Configuration for the completion API client.
///
/// The API key is the only required field; everything else falls back to
/// defaults suitable for document generation against OpenAI's API.
///
/// # Examples
///
/// ```rust
/// use playforge_openai::LlmConfig;
///
/// let config = LlmConfig::builder()
///     .with_api_key("your-api-key")
///     .with_model("gpt-4o")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Builder)]
#[must_use = "config does nothing unless you use it"]
#[builder(
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "validate_config")
)]
pub struct LlmConfig {
    /// API key used for bearer authentication.
    api_key: String,

    /// Base URL for API requests.
    #[builder(default)]
    base_url: Option<String>,

    /// Model identifier used for completions.
    #[builder(default)]
    model: Option<String>,

    /// Maximum tokens for a completion.
    #[builder(default)]
    max_tokens: Option<u32>,

    /// Sampling temperature (0.0-2.0).
    #[builder(default)]
    temperature: Option<f32>,

    /// Timeout applied to each completion request.
    #[builder(default)]
    request_timeout: Option<Duration>,
}

impl LlmConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> LlmConfigBuilder {
        LlmConfigBuilder::default()
    }

    /// Returns the configured API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the effective base URL (considering defaults).
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(defaults::BASE_URL)
    }

    /// Returns the effective model (considering defaults).
    pub fn effective_model(&self) -> &str {
        self.model.as_deref().unwrap_or(defaults::MODEL)
    }

    /// Returns the effective maximum tokens (considering defaults).
    pub fn effective_max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(defaults::MAX_TOKENS)
    }

    /// Returns the effective temperature (considering defaults).
    pub fn effective_temperature(&self) -> f32 {
        self.temperature.unwrap_or(defaults::TEMPERATURE)
    }

    /// Returns the effective request timeout (considering defaults).
    pub fn effective_request_timeout(&self) -> Duration {
        self.request_timeout
            .unwrap_or_else(|| Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS))
    }

    /// Returns the API key with all but the first four characters masked.
    pub(crate) fn masked_api_key(&self) -> String {
        let visible = self.api_key.chars().take(4).collect::<String>();
        format!("{visible}****")
    }
}
