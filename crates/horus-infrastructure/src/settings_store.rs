//! Durable settings persistence.
//!
//! Persists the settings aggregate as a `SettingsDocumentV1` JSON file under
//! the config directory, through the atomic storage layer. The on-disk
//! format is the same versioned document the export/import feature uses, so
//! a settings file is itself a valid export.

use std::path::PathBuf;

use horus_core::StudioSettings;
use horus_core::error::Result;

use crate::dto::SettingsDocumentV1;
use crate::storage::AtomicJsonFile;

/// Durable storage for the settings aggregate.
pub struct SettingsStore {
    file: AtomicJsonFile<SettingsDocumentV1>,
}

impl SettingsStore {
    /// Creates a store at the default location
    /// (`~/.config/horus/settings.json`).
    pub fn default_location() -> Result<Self> {
        let path = crate::paths::HorusPaths::settings_file()
            .map_err(|e| horus_core::HorusError::data_access(e.to_string()))?;
        Ok(Self::new(path))
    }

    /// Creates a store at a custom path (for testing).
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Loads the persisted settings.
    ///
    /// A missing or empty file yields the defaults; a corrupt file is an
    /// error rather than silent data loss.
    pub fn load(&self) -> Result<StudioSettings> {
        match self.file.load()? {
            Some(document) => Ok(document.into_domain()),
            None => Ok(StudioSettings::default()),
        }
    }

    /// Persists the settings atomically, replacing the previous document.
    pub fn save(&self, settings: &StudioSettings) -> Result<()> {
        let document: SettingsDocumentV1 = settings.into();
        self.file.save(&document)?;
        tracing::debug!("settings persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horus_core::persona::PersonaConfig;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::new(temp_dir.path().join("settings.json"));

        let settings = store.load().unwrap();
        assert_eq!(settings, StudioSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsStore::new(temp_dir.path().join("settings.json"));

        let mut settings = StudioSettings::default();
        settings.api_keys.add("key-a");
        settings.global_persona = PersonaConfig::new("Newsroom voice", "");

        store.save(&settings).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ broken").unwrap();

        let store = SettingsStore::new(path);
        assert!(store.load().is_err());
    }
}
