//! Settings usecase.
//!
//! Wires the shared settings state to export/import and the API key ring.
//! Import replaces the in-memory settings wholesale (never merged) and only
//! after the document parsed in full, so a corrupt file can never leave
//! partially applied state behind.

use std::sync::Arc;

use horus_core::api_key::KeyStatus;
use horus_core::StudioSettings;
use horus_core::error::{HorusError, Result};

use horus_infrastructure::SettingsStore;
use horus_infrastructure::settings_export;

use crate::SharedSettings;
use crate::notify::StatusNotifier;

/// Usecase owning settings persistence, export/import, and key management.
pub struct SettingsUsecase {
    settings: SharedSettings,
    store: Arc<SettingsStore>,
    notifier: Arc<dyn StatusNotifier>,
}

impl SettingsUsecase {
    pub fn new(
        settings: SharedSettings,
        store: Arc<SettingsStore>,
        notifier: Arc<dyn StatusNotifier>,
    ) -> Self {
        Self {
            settings,
            store,
            notifier,
        }
    }

    /// Loads persisted settings into the shared state at startup.
    pub async fn bootstrap(&self) -> Result<()> {
        let loaded = self.store.load()?;
        *self.settings.write().await = loaded;
        tracing::info!("settings loaded");
        Ok(())
    }

    /// Returns a snapshot of the current settings.
    pub async fn snapshot(&self) -> StudioSettings {
        self.settings.read().await.clone()
    }

    /// Exports every tracked setting as a pretty-printed JSON document.
    pub async fn export_settings(&self) -> Result<String> {
        let settings = self.settings.read().await;
        settings_export::export_to_string(&settings)
    }

    /// Imports a settings document, replacing the in-memory state wholesale.
    ///
    /// Parsing happens before any mutation; a rejected document leaves both
    /// memory and disk untouched.
    pub async fn import_settings(&self, json: &str) -> Result<()> {
        let imported = settings_export::import(json)?;

        // Disk first: a failed save must not leave memory imported while the
        // stale on-disk copy silently reverts it on the next startup
        self.store.save(&imported)?;
        *self.settings.write().await = imported;

        tracing::info!("settings imported");
        self.notifier.notify("Settings imported");
        Ok(())
    }

    // ========================================================================
    // API key ring
    // ========================================================================

    /// Adds an API key; the first key added becomes active.
    pub async fn add_api_key(&self, key: &str) -> Result<()> {
        let snapshot = {
            let mut settings = self.settings.write().await;
            if settings.api_keys.keys.iter().any(|k| k.key == key) {
                return Err(HorusError::conflict("api key", key));
            }
            settings.api_keys.add(key);
            settings.clone()
        };
        self.store.save(&snapshot)
    }

    /// Removes an API key by value.
    pub async fn remove_api_key(&self, key: &str) -> Result<()> {
        let snapshot = {
            let mut settings = self.settings.write().await;
            if !settings.api_keys.remove(key) {
                return Err(HorusError::not_found("api key", key));
            }
            settings.clone()
        };
        self.store.save(&snapshot)
    }

    /// Marks a key as the active one.
    pub async fn set_active_key(&self, key: &str) -> Result<()> {
        let snapshot = {
            let mut settings = self.settings.write().await;
            if !settings.api_keys.set_active(key) {
                return Err(HorusError::not_found("api key", key));
            }
            settings.clone()
        };
        self.store.save(&snapshot)
    }

    /// Records advisory status for a key (set by the consuming caller, never
    /// verified here).
    pub async fn mark_key_status(&self, key: &str, status: KeyStatus) -> Result<()> {
        let snapshot = {
            let mut settings = self.settings.write().await;
            if !settings.api_keys.mark(key, status) {
                return Err(HorusError::not_found("api key", key));
            }
            settings.clone()
        };
        self.store.save(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use horus_core::persona::PersonaConfig;
    use tempfile::TempDir;
    use tokio::sync::RwLock;

    use crate::notify::RecordingNotifier;

    struct Fixture {
        usecase: SettingsUsecase,
        settings: SharedSettings,
        _temp_dir: TempDir,
    }

    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(SettingsStore::new(temp_dir.path().join("settings.json")));
        let settings: SharedSettings = Arc::new(RwLock::new(StudioSettings::default()));
        let usecase = SettingsUsecase::new(
            settings.clone(),
            store,
            Arc::new(RecordingNotifier::new()),
        );
        Fixture {
            usecase,
            settings,
            _temp_dir: temp_dir,
        }
    }

    #[tokio::test]
    async fn test_export_import_round_trip() {
        let fx = fixture();
        {
            let mut settings = fx.settings.write().await;
            settings.api_keys.add("key-a");
            settings.global_persona = PersonaConfig::new("Voice", "<t/>");
            settings
                .selected_sources_by_article
                .insert(0, BTreeSet::from(["https://a.com".to_string()]));
        }

        let exported = fx.usecase.export_settings().await.unwrap();
        {
            *fx.settings.write().await = StudioSettings::default();
        }

        fx.usecase.import_settings(&exported).await.unwrap();
        let restored = fx.usecase.snapshot().await;
        assert_eq!(restored.api_keys.keys.len(), 1);
        assert_eq!(restored.global_persona.instructions, "Voice");
        assert!(restored.selected_sources_by_article[&0].contains("https://a.com"));
    }

    #[tokio::test]
    async fn test_failed_import_leaves_state_untouched() {
        let fx = fixture();
        fx.usecase.add_api_key("key-a").await.unwrap();

        let err = fx.usecase.import_settings("{ not json").await.unwrap_err();
        assert!(err.is_serialization());

        let snapshot = fx.usecase.snapshot().await;
        assert_eq!(snapshot.api_keys.keys.len(), 1);
    }

    #[tokio::test]
    async fn test_import_save_failure_keeps_memory_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        // A plain file where the store expects a directory makes save fail
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let store = Arc::new(SettingsStore::new(blocker.join("settings.json")));
        let settings: SharedSettings = Arc::new(RwLock::new(StudioSettings::default()));
        let usecase = SettingsUsecase::new(
            settings.clone(),
            store,
            Arc::new(RecordingNotifier::new()),
        );

        let exported = {
            let mut other = StudioSettings::default();
            other.api_keys.add("fresh-key");
            horus_infrastructure::settings_export::export_to_string(&other).unwrap()
        };

        assert!(usecase.import_settings(&exported).await.is_err());
        assert!(usecase.snapshot().await.api_keys.keys.is_empty());
    }

    #[tokio::test]
    async fn test_import_replaces_wholesale() {
        let fx = fixture();
        fx.usecase.add_api_key("stale-key").await.unwrap();

        let exported = {
            let mut other = StudioSettings::default();
            other.api_keys.add("fresh-key");
            horus_infrastructure::settings_export::export_to_string(&other).unwrap()
        };

        fx.usecase.import_settings(&exported).await.unwrap();
        let snapshot = fx.usecase.snapshot().await;
        assert_eq!(snapshot.api_keys.keys.len(), 1);
        assert_eq!(snapshot.api_keys.keys[0].key, "fresh-key");
    }

    #[tokio::test]
    async fn test_bootstrap_reads_persisted_state() {
        let fx = fixture();
        fx.usecase.add_api_key("key-a").await.unwrap();

        // Fresh shared state, same store
        *fx.settings.write().await = StudioSettings::default();
        fx.usecase.bootstrap().await.unwrap();
        assert_eq!(fx.usecase.snapshot().await.api_keys.keys.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_api_key_is_conflict() {
        let fx = fixture();
        fx.usecase.add_api_key("key-a").await.unwrap();
        let err = fx.usecase.add_api_key("key-a").await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_key_status_is_recorded() {
        let fx = fixture();
        fx.usecase.add_api_key("key-a").await.unwrap();
        fx.usecase
            .mark_key_status("key-a", KeyStatus::QuotaExceeded)
            .await
            .unwrap();

        let snapshot = fx.usecase.snapshot().await;
        assert_eq!(snapshot.api_keys.keys[0].status, KeyStatus::QuotaExceeded);
    }
}
