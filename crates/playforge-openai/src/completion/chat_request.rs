//! Chat completion request wire types.

use serde::Serialize;

use crate::client::LlmConfig;

/// A chat completion request body.
///
/// Only the parameters this service actually sends are modeled: the model
/// identifier, the system/user message pair, the output size bound, and
/// the sampling temperature.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,

    /// Conversation messages, system prompt first.
    pub messages: Vec<Message>,

    /// Maximum tokens for the completion.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,
}

impl ChatRequest {
    /// Builds a request from a configuration and a message list.
    ///
    /// Model, output bound, and temperature all come from the
    /// configuration; per-request overrides are deliberately not offered.
    pub fn from_config(config: &LlmConfig, messages: Vec<Message>) -> Self {
        Self {
            model: config.effective_model().to_owned(),
            messages,
            max_tokens: config.effective_max_tokens(),
            temperature: config.effective_temperature(),
        }
    }
}

/// A single conversation message.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    /// Who authored the message.
    pub role: Role,

    /// Message text.
    pub content: String,
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System-level instruction.
    System,
    /// End-user input.
    User,
    /// Model output.
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_from_config_uses_effective_values() {
        let config = LlmConfig::builder()
            .with_api_key("key")
            .with_model("gpt-4o-mini")
            .with_max_tokens(1234u32)
            .with_temperature(0.3)
            .build()
            .unwrap();

        let request = ChatRequest::from_config(
            &config,
            vec![Message::system("sys"), Message::user("hello")],
        );

        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.max_tokens, 1234);
        assert_eq!(request.temperature, 0.3);
        assert_eq!(request.messages.len(), 2);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let message = Message::system("be helpful");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be helpful");
    }
}
