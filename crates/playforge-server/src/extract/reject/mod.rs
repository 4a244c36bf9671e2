//! Extractors with rejection-to-error conversions.

mod json;
mod path;

pub use json::Json;
pub use path::Path;
