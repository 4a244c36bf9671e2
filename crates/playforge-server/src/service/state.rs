//! Application state and dependency injection.

use std::sync::Arc;

use super::config::ServiceConfig;
use super::error::Result;
use super::games::GameService;
use super::store::GameStore;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    game_service: GameService,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Builds the completion client and an empty game store. Fails when
    /// the configuration cannot produce a working client; the caller must
    /// treat that as fatal and not start serving.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let codegen = config.connect_llm()?;
        let game_service = GameService::new(Arc::new(codegen), GameStore::new());

        Ok(Self { game_service })
    }

    /// Creates state over an arbitrary codegen backend.
    #[cfg(test)]
    pub(crate) fn with_codegen(codegen: Arc<dyn playforge_openai::GameCodegen>) -> Self {
        Self {
            game_service: GameService::new(codegen, GameStore::new()),
        }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(game_service: GameService);
