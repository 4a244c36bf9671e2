//! HTTP error types and conversions from service errors.

mod game_error;
mod http_error;

pub use http_error::{Error, ErrorKind, Result};
