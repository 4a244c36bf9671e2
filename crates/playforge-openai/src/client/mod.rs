//! Completion API client and its configuration.

mod llm_client;
mod llm_config;

pub use llm_client::LlmClient;
pub use llm_config::{LlmConfig, LlmConfigBuilder};
