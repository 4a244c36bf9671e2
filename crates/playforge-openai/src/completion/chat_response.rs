//! Chat completion response wire types.

use serde::Deserialize;

use crate::{Error, Result};

/// A chat completion response body.
///
/// Of the provider's full response, only the first choice's text content
/// and the token-usage counters are consumed; everything else is ignored
/// during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; the first one carries the generated document.
    pub choices: Vec<Choice>,

    /// Token accounting for the exchange.
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Returns the text content of the first choice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidResponse`] if the response carries no
    /// choices or the first choice has no content.
    pub fn first_content(&self) -> Result<&str> {
        let choice = self
            .choices
            .first()
            .ok_or_else(|| Error::invalid_response("no choices in completion response"))?;

        choice
            .message
            .content
            .as_deref()
            .ok_or_else(|| Error::invalid_response("no content in first completion choice"))
    }
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ResponseMessage,
}

/// The message payload of a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Generated text, absent for refusals and tool-call responses.
    pub content: Option<String>,
}

/// Token usage counters reported by the provider.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,

    /// Tokens produced by the completion.
    pub completion_tokens: u32,

    /// Total tokens billed for the exchange.
    pub total_tokens: u32,
}
