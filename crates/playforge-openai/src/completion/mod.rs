//! Chat completion wire types and output extraction.

mod chat_request;
mod chat_response;
mod markup;

pub use chat_request::{ChatRequest, Message, Role};
pub use chat_response::{ChatResponse, Choice, ResponseMessage, Usage};
pub use markup::extract_html;
