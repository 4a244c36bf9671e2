#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;

pub mod client;
pub mod completion;
pub mod generate;
pub mod prompt;

pub use crate::client::{LlmClient, LlmConfig};
pub use crate::completion::{ChatRequest, ChatResponse, Message, Role, Usage, extract_html};
pub use crate::error::{Error, Result};
pub use crate::generate::{GameCodegen, GeneratedDocument, GenerationClient};
pub use crate::prompt::{Difficulty, GamePrompt};

/// Tracing target for client operations.
pub(crate) const TRACING_TARGET_CLIENT: &str = "playforge_openai::client";

/// Tracing target for generation operations.
pub(crate) const TRACING_TARGET_GENERATE: &str = "playforge_openai::generate";
