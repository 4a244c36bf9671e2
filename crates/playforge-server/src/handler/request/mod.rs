//! Request types for HTTP handlers.

mod games;

pub use games::{GamePathParams, GenerateGame, ImproveGame};
