//! Font service.
//!
//! The storage layer upserts on duplicate keys; this service is where font
//! name uniqueness is enforced as a business rule. Unlike profiles, fonts
//! get no overwrite-confirm flow: a silent overwrite would corrupt a
//! differently-keyed asset, so a duplicate name is blocked outright.

use std::sync::Arc;

use horus_core::error::{HorusError, Result};
use horus_core::font::{CustomFont, FontRepository};

use crate::notify::StatusNotifier;

/// Service managing user-uploaded fonts.
pub struct FontService {
    repository: Arc<dyn FontRepository>,
    notifier: Arc<dyn StatusNotifier>,
}

impl FontService {
    pub fn new(repository: Arc<dyn FontRepository>, notifier: Arc<dyn StatusNotifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Registers an uploaded font file.
    ///
    /// The font name is derived from the filename minus its extension.
    ///
    /// # Returns
    ///
    /// - `Ok(CustomFont)`: Stored record
    /// - `Err(HorusError::Conflict)`: A font with that name already exists
    pub async fn add_upload(&self, filename: &str, bytes: &[u8]) -> Result<CustomFont> {
        let font = CustomFont::from_upload(filename, bytes)?;
        self.add(font.clone()).await?;
        Ok(font)
    }

    /// Adds a font, enforcing name uniqueness before the store's upsert.
    pub async fn add(&self, font: CustomFont) -> Result<()> {
        let exists = self
            .repository
            .list()
            .await?
            .iter()
            .any(|f| f.name == font.name);
        if exists {
            return Err(HorusError::conflict("font", font.name));
        }

        self.repository.add(&font).await?;
        self.notifier.notify("Font added");
        Ok(())
    }

    /// Returns all stored fonts.
    pub async fn list(&self) -> Result<Vec<CustomFont>> {
        self.repository.list().await
    }

    /// Removes a font by name; removing a missing name is not an error.
    pub async fn remove(&self, name: &str) -> Result<()> {
        self.repository.remove(name).await?;
        self.notifier.notify("Font removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use horus_infrastructure::DirFontStore;
    use tempfile::TempDir;

    use crate::notify::RecordingNotifier;

    struct Fixture {
        service: FontService,
        _temp_dir: TempDir,
    }

    async fn fixture() -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(DirFontStore::new(temp_dir.path()));
        store.open().await.unwrap();
        let service = FontService::new(store, Arc::new(RecordingNotifier::new()));
        Fixture {
            service,
            _temp_dir: temp_dir,
        }
    }

    #[tokio::test]
    async fn test_add_upload_derives_name() {
        let fx = fixture().await;
        let font = fx.service.add_upload("Cairo.ttf", &[1, 2, 3]).await.unwrap();
        assert_eq!(font.name, "Cairo");

        let fonts = fx.service.list().await.unwrap();
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].name, "Cairo");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_blocked() {
        let fx = fixture().await;
        fx.service.add_upload("Cairo.ttf", &[1]).await.unwrap();

        let err = fx.service.add_upload("Cairo.otf", &[2]).await.unwrap_err();
        assert!(err.is_conflict());

        // First upload untouched
        let fonts = fx.service.list().await.unwrap();
        assert_eq!(fonts.len(), 1);
        assert!(fonts[0].data.starts_with("data:font/ttf;"));
    }

    #[tokio::test]
    async fn test_aliased_name_cannot_destroy_existing_font() {
        let fx = fixture().await;
        fx.service.add_upload("Noto Sans.ttf", &[1]).await.unwrap();

        // Distinct name, same storage stem: must conflict, not overwrite
        let err = fx
            .service
            .add_upload("Noto_Sans.ttf", &[2])
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        let fonts = fx.service.list().await.unwrap();
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].name, "Noto Sans");
    }

    #[tokio::test]
    async fn test_remove_missing_is_ok() {
        let fx = fixture().await;
        fx.service.remove("NonExistentFont").await.unwrap();
        assert!(fx.service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_not_opened_surfaces_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(DirFontStore::new(temp_dir.path()));
        let service = FontService::new(store, Arc::new(RecordingNotifier::new()));

        let err = service.add_upload("Cairo.ttf", &[1]).await.unwrap_err();
        assert!(err.is_not_initialized());
    }
}
