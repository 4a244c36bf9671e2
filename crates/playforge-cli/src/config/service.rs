//! Service configuration with CLI argument parsing.
//!
//! CLI-friendly OpenAI settings that convert into the server's
//! [`ServiceConfig`]. The API key is required: parsing fails (and the
//! process never starts serving) when `OPENAI_API_KEY` is absent.
//!
//! [`ServiceConfig`]: playforge_server::service::ServiceConfig

use clap::Args;
use playforge_server::service::ServiceConfig as ServerServiceConfig;
use serde::{Deserialize, Serialize};

/// CLI service configuration with command-line argument parsing.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    /// OpenAI API key.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// OpenAI-compatible base URL override.
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    /// Model identifier used for completions.
    #[arg(long, env = "OPENAI_MODEL")]
    pub openai_model: Option<String>,

    /// Maximum tokens per generated document.
    #[arg(long, env = "OPENAI_MAX_TOKENS")]
    pub openai_max_tokens: Option<u32>,

    /// Sampling temperature (0.0-2.0).
    #[arg(long, env = "OPENAI_TEMPERATURE")]
    pub openai_temperature: Option<f32>,

    /// Timeout for each upstream completion request, in seconds.
    #[arg(long, env = "OPENAI_REQUEST_TIMEOUT")]
    pub openai_request_timeout: Option<u64>,
}

impl ServiceConfig {
    /// Converts CLI arguments into the server's service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid combinations (empty key, malformed
    /// base URL, zero timeout). The caller must treat this as fatal.
    pub fn into_service_config(self) -> anyhow::Result<ServerServiceConfig> {
        let mut builder =
            ServerServiceConfig::builder().with_openai_api_key(self.openai_api_key);

        if let Some(base_url) = self.openai_base_url {
            builder = builder.with_openai_base_url(base_url);
        }
        if let Some(model) = self.openai_model {
            builder = builder.with_model(model);
        }
        if let Some(max_tokens) = self.openai_max_tokens {
            builder = builder.with_max_tokens(max_tokens);
        }
        if let Some(temperature) = self.openai_temperature {
            builder = builder.with_temperature(temperature);
        }
        if let Some(secs) = self.openai_request_timeout {
            builder = builder.with_request_timeout_secs(secs);
        }

        builder
            .build()
            .map_err(|e| anyhow::anyhow!("invalid OpenAI configuration: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_key(key: &str) -> ServiceConfig {
        ServiceConfig {
            openai_api_key: key.to_owned(),
            openai_base_url: None,
            openai_model: None,
            openai_max_tokens: None,
            openai_temperature: None,
            openai_request_timeout: None,
        }
    }

    #[test]
    fn converts_into_server_config() {
        let mut args = args_with_key("sk-test");
        args.openai_model = Some("gpt-4o-mini".to_owned());
        args.openai_request_timeout = Some(60);

        let config = args.into_service_config().unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.request_timeout_secs, Some(60));
    }

    #[test]
    fn empty_key_is_fatal() {
        assert!(args_with_key("").into_service_config().is_err());
    }
}
