//! Application layer of the Horus studio.
//!
//! Services wiring the core domain to the infrastructure seams. One
//! `StudioSettings` instance is created at startup, wrapped in
//! [`SharedSettings`], and handed to every service that needs it - there are
//! no ambient singletons.

pub mod font_service;
pub mod notify;
pub mod persona_service;
pub mod profile_service;
pub mod settings_usecase;

use std::sync::Arc;

use horus_core::StudioSettings;
use horus_core::error::{HorusError, Result};
use horus_infrastructure::storage::ConfigStorage;
use horus_infrastructure::{HttpTemplateFetcher, TemplateFetcher};
use tokio::sync::RwLock;

pub use font_service::FontService;
pub use notify::{StatusNotifier, TracingNotifier};
pub use persona_service::PersonaService;
pub use profile_service::{ProfileService, SaveOutcome};
pub use settings_usecase::SettingsUsecase;

/// The single process-wide settings instance, shared by the services.
pub type SharedSettings = Arc<RwLock<StudioSettings>>;

/// Creates the shared settings state for a new application instance.
pub fn shared_settings() -> SharedSettings {
    Arc::new(RwLock::new(StudioSettings::default()))
}

/// Builds the template fetcher from a config storage, falling back to the
/// default base URL when no `config.toml` exists.
pub fn template_fetcher_from(storage: &ConfigStorage) -> Result<Arc<dyn TemplateFetcher>> {
    let config = storage
        .load_or_default()
        .map_err(|e| HorusError::config(e.to_string()))?;
    Ok(Arc::new(HttpTemplateFetcher::from_config(&config)))
}

/// Builds the template fetcher from the default `config.toml` location.
pub fn default_template_fetcher() -> Result<Arc<dyn TemplateFetcher>> {
    let storage = ConfigStorage::new().map_err(|e| HorusError::config(e.to_string()))?;
    template_fetcher_from(&storage)
}
