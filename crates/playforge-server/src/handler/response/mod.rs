//! Response types for HTTP handlers.

mod errors;
mod games;
mod monitors;

pub use errors::ErrorResponse;
pub use games::{GameList, GeneratedGame, ImprovedGame};
pub use monitors::HealthStatus;
