//! Service layer: configuration, state, the game store, and orchestration.

mod config;
mod error;
pub(crate) mod games;
mod state;
mod store;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::{Result, ServiceError};
pub use games::{GameService, GameServiceError};
pub use state::ServiceState;
pub use store::{Game, GameId, GameStore, GameSummary};
