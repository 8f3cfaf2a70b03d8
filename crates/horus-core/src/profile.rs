//! Saved generation profiles.
//!
//! A profile is a named, user-saved bundle of per-content-type generation
//! preferences. Uniqueness is enforced by name with a case-sensitive exact
//! match; the overwrite-on-conflict flow lives in the application layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::persona::PersonaConfig;

/// Per-page generation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePreferences {
    /// Target article length in words
    pub article_length: u32,
    /// Image style hint passed to the image model
    pub image_style: String,
    /// Output language code (e.g. "ar", "en")
    pub language: String,
    /// Whether generated articles should embed images
    pub include_images: bool,
    /// How many images to request per article
    pub image_count: u8,
}

impl Default for PagePreferences {
    fn default() -> Self {
        Self {
            article_length: 600,
            image_style: "photorealistic".to_string(),
            language: "ar".to_string(),
            include_images: true,
            image_count: 1,
        }
    }
}

/// A named, saved bundle of generation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Display name; the case-sensitive uniqueness key
    pub name: String,
    /// Content type this profile targets (e.g. "news", "sports")
    pub content_type: String,
    /// Generation preferences
    pub preferences: PagePreferences,
    /// Whether generation may ground itself with internet search
    #[serde(default)]
    pub use_internet_search: bool,
    /// Optional persona override saved with the profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_persona: Option<PersonaConfig>,
    /// Text model identifier
    pub selected_text_model: String,
    /// Image model identifier
    pub selected_image_model: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a profile with a fresh UUID and the current timestamp.
    pub fn new(name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            content_type: content_type.into(),
            preferences: PagePreferences::default(),
            use_internet_search: false,
            custom_persona: None,
            selected_text_model: "gemini-2.5-flash".to_string(),
            selected_image_model: "imagen-3.0".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Validate the profile and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Profile name is required and cannot be empty".to_string());
        }
        if self.content_type.trim().is_empty() {
            return Err("Content type is required and cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_uuid() {
        let profile = Profile::new("Morning News", "news");
        assert!(Uuid::parse_str(&profile.id).is_ok());
    }

    #[test]
    fn test_validate_success() {
        assert!(Profile::new("Morning News", "news").validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let profile = Profile::new("  ", "news");
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_empty_content_type() {
        let profile = Profile::new("Morning News", "");
        assert!(profile.validate().is_err());
    }
}
