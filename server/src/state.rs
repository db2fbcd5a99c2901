//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the guard middleware via the `State`
//! extractor. Clone is required by Axum; inner fields are Arc-wrapped.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::guard::{GuardError, HttpProfileValidator, ProfileValidator};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub validator: Arc<dyn ProfileValidator>,
}

impl AppState {
    /// Build state with the HTTP profile validator.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Client`] if the HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, GuardError> {
        let validator = HttpProfileValidator::new(config.profile_url(), config.guard_timeout)?;
        Ok(Self::with_validator(config, Arc::new(validator)))
    }

    #[must_use]
    pub fn with_validator(config: ServerConfig, validator: Arc<dyn ProfileValidator>) -> Self {
        Self { config: Arc::new(config), validator }
    }
}
