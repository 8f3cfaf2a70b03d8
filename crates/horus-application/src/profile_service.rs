//! Profile service.
//!
//! Saved profiles are unique by name (case-sensitive exact match). A save
//! that collides with an existing name is not applied; the caller must ask
//! the user and retry with `save_overwriting`. Declining simply means never
//! making that second call, which leaves the list unmodified.

use std::sync::Arc;

use horus_core::error::{HorusError, Result};
use horus_core::profile::Profile;

use horus_infrastructure::SettingsStore;

use crate::SharedSettings;
use crate::notify::StatusNotifier;

/// Outcome of a non-forcing profile save.
#[derive(Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The profile was appended and persisted
    Saved,
    /// A profile with the same name exists; nothing was changed
    NeedsOverwrite,
}

/// Service managing the saved profile list.
pub struct ProfileService {
    settings: SharedSettings,
    store: Arc<SettingsStore>,
    notifier: Arc<dyn StatusNotifier>,
}

impl ProfileService {
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

    /// Returns all saved profiles in save order.
    pub async fn list(&self) -> Vec<Profile> {
        self.settings.read().await.profiles.clone()
    }

    /// Saves a new profile, or reports a name collision without mutating
    /// anything.
    pub async fn save(&self, profile: Profile) -> Result<SaveOutcome> {
        profile.validate().map_err(HorusError::config)?;

        let snapshot = {
            let mut settings = self.settings.write().await;
            if settings.profiles.iter().any(|p| p.name == profile.name) {
                return Ok(SaveOutcome::NeedsOverwrite);
            }
            settings.profiles.push(profile);
            settings.clone()
        };

        self.store.save(&snapshot)?;
        self.notifier.notify("Profile saved");
        Ok(SaveOutcome::Saved)
    }

    /// Saves a profile after the user confirmed the overwrite. Replaces the
    /// same-named profile in place, or appends when the collision vanished
    /// in the meantime.
    pub async fn save_overwriting(&self, profile: Profile) -> Result<()> {
        profile.validate().map_err(HorusError::config)?;

        let snapshot = {
            let mut settings = self.settings.write().await;
            match settings.profiles.iter_mut().find(|p| p.name == profile.name) {
                Some(existing) => *existing = profile,
                None => settings.profiles.push(profile),
            }
            settings.clone()
        };

        self.store.save(&snapshot)?;
        self.notifier.notify("Profile saved");
        Ok(())
    }

    /// Deletes a profile by name.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let snapshot = {
            let mut settings = self.settings.write().await;
            let before = settings.profiles.len();
            settings.profiles.retain(|p| p.name != name);
            if settings.profiles.len() == before {
                return Err(HorusError::not_found("profile", name));
            }
            settings.clone()
        };

        self.store.save(&snapshot)?;
        self.notifier.notify("Profile deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use horus_core::StudioSettings;
    use tempfile::TempDir;
    use tokio::sync::RwLock;

    use crate::notify::RecordingNotifier;

    struct Fixture {
        service: ProfileService,
        store: Arc<SettingsStore>,
        _temp_dir: TempDir,
    }

    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(SettingsStore::new(temp_dir.path().join("settings.json")));
        let service = ProfileService::new(
            Arc::new(RwLock::new(StudioSettings::default())),
            store.clone(),
            Arc::new(RecordingNotifier::new()),
        );
        Fixture {
            service,
            store,
            _temp_dir: temp_dir,
        }
    }

    #[tokio::test]
    async fn test_save_new_profile() {
        let fx = fixture();
        let outcome = fx.service.save(Profile::new("Morning News", "news")).await;
        assert_eq!(outcome.unwrap(), SaveOutcome::Saved);
        assert_eq!(fx.service.list().await.len(), 1);

        // Persisted too
        let persisted = fx.store.load().unwrap();
        assert_eq!(persisted.profiles.len(), 1);
    }

    #[tokio::test]
    async fn test_colliding_save_requires_confirmation() {
        let fx = fixture();
        let original = Profile::new("Morning News", "news");
        fx.service.save(original.clone()).await.unwrap();

        let mut replacement = Profile::new("Morning News", "sports");
        replacement.use_internet_search = true;

        let outcome = fx.service.save(replacement).await.unwrap();
        assert_eq!(outcome, SaveOutcome::NeedsOverwrite);

        // Declining means never calling save_overwriting: list unchanged
        let profiles = fx.service.list().await;
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, original.id);
        assert_eq!(profiles[0].content_type, "news");
    }

    #[tokio::test]
    async fn test_name_match_is_case_sensitive() {
        let fx = fixture();
        fx.service
            .save(Profile::new("Morning News", "news"))
            .await
            .unwrap();

        let outcome = fx
            .service
            .save(Profile::new("morning news", "news"))
            .await
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Saved);
        assert_eq!(fx.service.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_confirmed_overwrite_replaces_in_place() {
        let fx = fixture();
        fx.service
            .save(Profile::new("Morning News", "news"))
            .await
            .unwrap();
        fx.service.save(Profile::new("Evening", "news")).await.unwrap();

        let mut replacement = Profile::new("Morning News", "sports");
        replacement.use_internet_search = true;
        fx.service.save_overwriting(replacement.clone()).await.unwrap();

        let profiles = fx.service.list().await;
        assert_eq!(profiles.len(), 2);
        // Position preserved, content replaced
        assert_eq!(profiles[0].id, replacement.id);
        assert_eq!(profiles[0].content_type, "sports");
    }

    #[tokio::test]
    async fn test_delete_missing_profile_is_not_found() {
        let fx = fixture();
        let err = fx.service.delete("Nope").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_invalid_profile_is_rejected() {
        let fx = fixture();
        let err = fx.service.save(Profile::new("  ", "news")).await.unwrap_err();
        assert!(matches!(err, HorusError::Config(_)));
        assert!(fx.service.list().await.is_empty());
    }
}
