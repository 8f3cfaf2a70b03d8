//! Custom font model and repository seam.
//!
//! Fonts are kept out of the exportable settings document because of their
//! binary size; they live in a dedicated keyed store behind
//! [`FontRepository`].

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::error::{HorusError, Result};

/// A user-uploaded font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFont {
    /// Unique key, derived from the uploaded filename minus its extension
    pub name: String,
    /// Data-URL-encoded binary (`data:<mime>;base64,...`)
    pub data: String,
}

impl CustomFont {
    /// Builds a font record from an uploaded file.
    ///
    /// The name is the filename stem; the payload is wrapped in a data URL
    /// with a MIME type guessed from the extension.
    ///
    /// # Returns
    ///
    /// - `Ok(CustomFont)`: Name derived and payload encoded
    /// - `Err(HorusError::DataAccess)`: Filename has no usable stem
    pub fn from_upload(filename: &str, bytes: &[u8]) -> Result<Self> {
        let (stem, extension) = match filename.rsplit_once('.') {
            Some((stem, ext)) => (stem, ext),
            None => (filename, ""),
        };

        let name = stem.trim();
        if name.is_empty() {
            return Err(HorusError::data_access(format!(
                "Cannot derive a font name from '{filename}'"
            )));
        }

        let mime = match extension.to_ascii_lowercase().as_str() {
            "ttf" => "font/ttf",
            "otf" => "font/otf",
            "woff" => "font/woff",
            "woff2" => "font/woff2",
            _ => "application/octet-stream",
        };

        Ok(Self {
            name: name.to_string(),
            data: format!("data:{mime};base64,{}", BASE64.encode(bytes)),
        })
    }
}

/// An abstract keyed store for font binaries.
///
/// The storage layer performs an upsert on duplicate keys (last write wins);
/// uniqueness is a business rule enforced by the calling service before the
/// write reaches the store.
#[async_trait::async_trait]
pub trait FontRepository: Send + Sync {
    /// Inserts or replaces a font by name.
    async fn add(&self, font: &CustomFont) -> Result<()>;

    /// Returns all stored fonts; order is unspecified.
    async fn list(&self) -> Result<Vec<CustomFont>>;

    /// Removes a font by name. Removing a missing name is not an error.
    async fn remove(&self, name: &str) -> Result<()>;
}
