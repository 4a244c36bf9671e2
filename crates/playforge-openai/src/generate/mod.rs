//! High-level game document generation.
//!
//! [`GameCodegen`] is the seam between request orchestration and the model
//! provider; [`GenerationClient`] is its production implementation, wiring
//! the prompt composer, the completion client, and output extraction
//! together.

use async_trait::async_trait;

use crate::client::LlmClient;
use crate::completion::{ChatRequest, Usage, extract_html};
use crate::prompt::{Difficulty, GamePrompt};
use crate::{Error, Result, TRACING_TARGET_GENERATE};

/// A generated self-contained HTML document plus provider accounting.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// The extracted HTML document.
    pub html: String,

    /// Token usage reported by the provider, when available.
    pub usage: Option<Usage>,
}

/// Backend capable of producing and revising game documents.
///
/// One call maps to one completion exchange: implementations must not
/// retry on failure, since a silently repeated generation duplicates
/// billable work and the caller is better placed to decide.
#[async_trait]
pub trait GameCodegen: Send + Sync {
    /// Generates a new game document from a description.
    async fn generate(&self, description: &str, difficulty: Difficulty)
    -> Result<GeneratedDocument>;

    /// Produces a complete replacement for an existing game document.
    async fn improve(&self, current_code: &str, change: &str) -> Result<GeneratedDocument>;
}

/// Production [`GameCodegen`] backed by the completion API.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    llm_client: LlmClient,
    prompt: GamePrompt,
}

impl GenerationClient {
    /// Creates a new generation client with the default prompt composer.
    pub fn new(llm_client: LlmClient) -> Self {
        Self {
            llm_client,
            prompt: GamePrompt::new(),
        }
    }

    /// Sends the composed messages and extracts the resulting document.
    ///
    /// An extraction that yields an empty document is treated as a failed
    /// generation, not a success with empty content.
    async fn complete(&self, request: ChatRequest) -> Result<GeneratedDocument> {
        let response = self.llm_client.chat_completion(&request).await?;
        let content = response.first_content()?;
        let html = extract_html(content);

        if let Some(usage) = &response.usage {
            tracing::info!(
                target: TRACING_TARGET_GENERATE,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                document_bytes = html.len(),
                "Completion finished"
            );
        }

        if html.is_empty() {
            return Err(Error::EmptyCompletion);
        }

        Ok(GeneratedDocument {
            html,
            usage: response.usage,
        })
    }
}

#[async_trait]
impl GameCodegen for GenerationClient {
    async fn generate(
        &self,
        description: &str,
        difficulty: Difficulty,
    ) -> Result<GeneratedDocument> {
        tracing::debug!(
            target: TRACING_TARGET_GENERATE,
            %difficulty,
            description_len = description.len(),
            "Composing generation request"
        );

        let messages = self.prompt.generation_messages(description, difficulty);
        let request = ChatRequest::from_config(self.llm_client.config(), messages);
        self.complete(request).await
    }

    async fn improve(&self, current_code: &str, change: &str) -> Result<GeneratedDocument> {
        tracing::debug!(
            target: TRACING_TARGET_GENERATE,
            current_code_len = current_code.len(),
            change_len = change.len(),
            "Composing improvement request"
        );

        let messages = self.prompt.improvement_messages(current_code, change);
        let request = ChatRequest::from_config(self.llm_client.config(), messages);
        self.complete(request).await
    }
}
