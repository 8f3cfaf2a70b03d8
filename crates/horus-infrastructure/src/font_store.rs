//! Directory-backed font store.
//!
//! One font = one JSON file under the fonts directory, keyed by a sanitized
//! form of the font name. `add` is an upsert for the same name, but two
//! distinct names can sanitize to the same file stem; writing one over the
//! other would destroy a differently-keyed asset, so an aliased stem is a
//! conflict here regardless of the service-level uniqueness rule.
//!
//! Initialization is lazy and explicit: `open()` must be called once before
//! any operation; earlier calls fail with a not-initialized error instead of
//! silently doing nothing.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use horus_core::error::{HorusError, Result};
use horus_core::font::{CustomFont, FontRepository};

/// Directory-backed keyed store for user-uploaded fonts.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── Cairo.json
/// ├── Noto_Sans_Arabic.json
/// └── Tajawal.json
/// ```
pub struct DirFontStore {
    dir: PathBuf,
    opened: AtomicBool,
}

impl DirFontStore {
    /// Creates a handle rooted at the default fonts directory.
    pub fn default_location() -> Result<Self> {
        let dir = crate::paths::HorusPaths::fonts_dir()
            .map_err(|e| HorusError::data_access(e.to_string()))?;
        Ok(Self::new(&dir))
    }

    /// Creates a handle rooted at a custom directory (for testing).
    ///
    /// The store is not usable until [`DirFontStore::open`] succeeds.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            opened: AtomicBool::new(false),
        }
    }

    /// Opens the store, creating the directory if needed.
    ///
    /// Must be called once before any other operation. Calling it again is
    /// harmless.
    pub async fn open(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        self.opened.store(true, Ordering::Release);
        tracing::debug!(dir = %self.dir.display(), "font store opened");
        Ok(())
    }

    fn ensure_open(&self) -> Result<()> {
        if self.opened.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(HorusError::NotInitialized("font store"))
        }
    }

    fn entry_path(&self, name: &str) -> Result<PathBuf> {
        let stem = sanitize_stem(name);
        if stem.is_empty() {
            return Err(HorusError::data_access(format!(
                "Font name '{name}' contains no storable characters"
            )));
        }
        Ok(self.dir.join(format!("{stem}.json")))
    }

    /// Reads the font stored at `path`, or `None` when no entry exists.
    async fn existing_entry(&self, path: &Path) -> Result<Option<CustomFont>> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Reduces a font name to a filesystem-safe file stem.
///
/// Alphanumerics, '-', '_' and '.' pass through; spaces become '_'; anything
/// else is dropped.
fn sanitize_stem(name: &str) -> String {
    name.trim()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            c if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' => Some(c),
            _ => None,
        })
        .collect()
}

#[async_trait::async_trait]
impl FontRepository for DirFontStore {
    async fn add(&self, font: &CustomFont) -> Result<()> {
        self.ensure_open()?;

        let path = self.entry_path(&font.name)?;

        // Same stem but a different stored name means the write would
        // silently destroy another font's entry
        if let Some(existing) = self.existing_entry(&path).await? {
            if existing.name != font.name {
                return Err(HorusError::conflict("font", font.name.clone()));
            }
        }

        let json = serde_json::to_string_pretty(font)?;

        // tmp + rename so a crash mid-write never leaves a torn entry
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json.as_bytes()).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        tracing::debug!(name = %font.name, "font stored");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CustomFont>> {
        self.ensure_open()?;

        let mut fonts = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = tokio::fs::read_to_string(&path).await?;
            let font: CustomFont = serde_json::from_str(&content)?;
            fonts.push(font);
        }
        Ok(fonts)
    }

    async fn remove(&self, name: &str) -> Result<()> {
        self.ensure_open()?;

        let path = self.entry_path(name)?;
        // Idempotent: a missing entry is not an error, and an aliased stem
        // belonging to a different font is treated as missing
        match self.existing_entry(&path).await? {
            Some(existing) if existing.name == name => {
                tokio::fs::remove_file(&path).await?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
