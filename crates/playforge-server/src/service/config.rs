//! App [`state`] configuration.
//!
//! [`state`]: crate::service::ServiceState

use derive_builder::Builder;
use playforge_openai::{GenerationClient, LlmClient, LlmConfig};
use serde::{Deserialize, Serialize};

use super::error::{Result, ServiceError};

/// Configuration for the game generation service.
///
/// The OpenAI API key is the only required setting; the process must not
/// come up without one. Model parameters and the upstream request timeout
/// fall back to the client crate's defaults when unset.
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[must_use = "config does nothing unless you use it"]
#[builder(
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate")
)]
pub struct ServiceConfig {
    /// OpenAI API key.
    pub openai_api_key: String,

    /// OpenAI-compatible base URL override.
    #[builder(default)]
    pub openai_base_url: Option<String>,

    /// Model identifier used for completions.
    #[builder(default)]
    pub model: Option<String>,

    /// Maximum tokens per generated document.
    #[builder(default)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    #[builder(default)]
    pub temperature: Option<f32>,

    /// Timeout for each upstream completion request, in seconds.
    #[builder(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Builds the completion-backed generation client.
    pub fn connect_llm(&self) -> Result<GenerationClient> {
        let config = {
            let mut builder = LlmConfig::builder().with_api_key(&self.openai_api_key);

            if let Some(base_url) = &self.openai_base_url {
                builder = builder.with_base_url(base_url.clone());
            }
            if let Some(model) = &self.model {
                builder = builder.with_model(model.clone());
            }
            if let Some(max_tokens) = self.max_tokens {
                builder = builder.with_max_tokens(max_tokens);
            }
            if let Some(temperature) = self.temperature {
                builder = builder.with_temperature(temperature);
            }
            if let Some(secs) = self.request_timeout_secs {
                builder = builder.with_request_timeout(std::time::Duration::from_secs(secs));
            }

            builder.build()
        }
        .map_err(|e| ServiceError::config(e.to_string()))?;

        let client = LlmClient::new(config).map_err(|source| ServiceError::Init {
            component: "OpenAI",
            source,
        })?;

        Ok(GenerationClient::new(client))
    }
}

impl ServiceConfigBuilder {
    /// Wrapper for builder validation that returns String errors.
    fn validate(builder: &ServiceConfigBuilder) -> Result<(), String> {
        if let Some(api_key) = &builder.openai_api_key
            && api_key.trim().is_empty()
        {
            return Err("OpenAI API key cannot be empty".to_string());
        }

        if let Some(Some(base_url)) = &builder.openai_base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(
                    "OpenAI base URL must start with 'http://' or 'https://'".to_string()
                );
            }
        }

        if let Some(Some(secs)) = &builder.request_timeout_secs {
            if *secs == 0 {
                return Err("Request timeout must be at least 1 second".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_api_key() {
        assert!(ServiceConfig::builder().build().is_err());
        assert!(
            ServiceConfig::builder()
                .with_openai_api_key("  ")
                .build()
                .is_err()
        );
    }

    #[test]
    fn builder_with_key_only() {
        let config = ServiceConfig::builder()
            .with_openai_api_key("sk-test")
            .build()
            .unwrap();

        assert_eq!(config.openai_api_key, "sk-test");
        assert!(config.model.is_none());
    }

    #[test]
    fn builder_rejects_bad_base_url() {
        let result = ServiceConfig::builder()
            .with_openai_api_key("sk-test")
            .with_openai_base_url("localhost:8080")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_zero_timeout() {
        let result = ServiceConfig::builder()
            .with_openai_api_key("sk-test")
            .with_request_timeout_secs(0u64)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn connect_llm_builds_generation_client() {
        let config = ServiceConfig::builder()
            .with_openai_api_key("sk-test")
            .with_model("gpt-4o-mini")
            .with_request_timeout_secs(30u64)
            .build()
            .unwrap();

        assert!(config.connect_llm().is_ok());
    }
}
