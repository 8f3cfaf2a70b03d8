//! Settings document DTOs (schema version 1).
//!
//! Field names here are the export format contract: they must stay stable
//! across releases so that older documents keep importing. Schema changes
//! get a new versioned document type plus a conversion, never an edit to
//! this one.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use horus_core::StudioSettings;
use horus_core::api_key::{ApiKey, ApiKeyRing, KeyStatus};
use horus_core::article::GeneratedArticle;
use horus_core::persona::PersonaConfig;
use horus_core::profile::{PagePreferences, Profile};

/// Current export document schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// The complete exportable settings document.
///
/// Every field is required on import; a document missing any of them is
/// rejected as a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocumentV1 {
    /// Schema version; imports with a different version are rejected
    pub schema_version: u32,
    pub api_keys: Vec<ApiKeyDto>,
    pub active_key_index: Option<usize>,
    pub global_persona: PersonaDto,
    /// Page-scoped persona overrides, keyed by page id
    pub page_personas: BTreeMap<String, PersonaDto>,
    pub profiles: Vec<ProfileDto>,
    pub preferences: PreferencesDto,
    pub articles: Vec<ArticleDto>,
    /// Integer-keyed map flattened to explicit pairs for JSON
    pub selected_sources_by_article: Vec<SelectedSourcesDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyDto {
    pub key: String,
    pub status: KeyStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDto {
    pub instructions: String,
    pub html_template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub name: String,
    pub content_type: String,
    pub preferences: PreferencesDto,
    pub use_internet_search: bool,
    pub custom_persona: Option<PersonaDto>,
    pub selected_text_model: String,
    pub selected_image_model: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDto {
    pub article_length: u32,
    pub image_style: String,
    pub language: String,
    pub include_images: bool,
    pub image_count: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub html: String,
    pub slug: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub rating: Option<u8>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

/// One entry of the flattened source-selection map.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSourcesDto {
    pub article_index: u32,
    pub sources: Vec<String>,
}

// ============================================================================
// Domain -> DTO conversions
// ============================================================================

impl From<&ApiKey> for ApiKeyDto {
    fn from(key: &ApiKey) -> Self {
        Self {
            key: key.key.clone(),
            status: key.status,
        }
    }
}

impl From<&PersonaConfig> for PersonaDto {
    fn from(persona: &PersonaConfig) -> Self {
        Self {
            instructions: persona.instructions.clone(),
            html_template: persona.html_template.clone(),
        }
    }
}

impl From<&PagePreferences> for PreferencesDto {
    fn from(prefs: &PagePreferences) -> Self {
        Self {
            article_length: prefs.article_length,
            image_style: prefs.image_style.clone(),
            language: prefs.language.clone(),
            include_images: prefs.include_images,
            image_count: prefs.image_count,
        }
    }
}

impl From<&Profile> for ProfileDto {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            content_type: profile.content_type.clone(),
            preferences: (&profile.preferences).into(),
            use_internet_search: profile.use_internet_search,
            custom_persona: profile.custom_persona.as_ref().map(Into::into),
            selected_text_model: profile.selected_text_model.clone(),
            selected_image_model: profile.selected_image_model.clone(),
            created_at: profile.created_at,
        }
    }
}

impl From<&GeneratedArticle> for ArticleDto {
    fn from(article: &GeneratedArticle) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            html: article.html.clone(),
            slug: article.slug.clone(),
            meta_description: article.meta_description.clone(),
            meta_keywords: article.meta_keywords.clone(),
            rating: article.rating,
            is_favorite: article.is_favorite,
            created_at: article.created_at,
        }
    }
}

impl From<&StudioSettings> for SettingsDocumentV1 {
    fn from(settings: &StudioSettings) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            api_keys: settings.api_keys.keys.iter().map(Into::into).collect(),
            active_key_index: settings.api_keys.active,
            global_persona: (&settings.global_persona).into(),
            page_personas: settings
                .page_personas
                .iter()
                .map(|(page, persona)| (page.clone(), persona.into()))
                .collect(),
            profiles: settings.profiles.iter().map(Into::into).collect(),
            preferences: (&settings.preferences).into(),
            articles: settings.articles.iter().map(Into::into).collect(),
            selected_sources_by_article: settings
                .selected_sources_by_article
                .iter()
                .map(|(index, sources)| SelectedSourcesDto {
                    article_index: *index,
                    sources: sources.iter().cloned().collect(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// DTO -> domain conversions
// ============================================================================

impl PersonaDto {
    pub fn into_domain(self) -> PersonaConfig {
        PersonaConfig {
            instructions: self.instructions,
            html_template: self.html_template,
        }
    }
}

impl PreferencesDto {
    pub fn into_domain(self) -> PagePreferences {
        PagePreferences {
            article_length: self.article_length,
            image_style: self.image_style,
            language: self.language,
            include_images: self.include_images,
            image_count: self.image_count,
        }
    }
}

impl ProfileDto {
    pub fn into_domain(self) -> Profile {
        Profile {
            id: self.id,
            name: self.name,
            content_type: self.content_type,
            preferences: self.preferences.into_domain(),
            use_internet_search: self.use_internet_search,
            custom_persona: self.custom_persona.map(PersonaDto::into_domain),
            selected_text_model: self.selected_text_model,
            selected_image_model: self.selected_image_model,
            created_at: self.created_at,
        }
    }
}

impl ArticleDto {
    pub fn into_domain(self) -> GeneratedArticle {
        GeneratedArticle {
            id: self.id,
            title: self.title,
            html: self.html,
            slug: self.slug,
            meta_description: self.meta_description,
            meta_keywords: self.meta_keywords,
            rating: self.rating,
            is_favorite: self.is_favorite,
            created_at: self.created_at,
        }
    }
}

impl SettingsDocumentV1 {
    /// Reconstructs the full in-memory settings graph, rebuilding every
    /// container the document flattened for JSON.
    pub fn into_domain(self) -> StudioSettings {
        let keys: Vec<ApiKey> = self
            .api_keys
            .into_iter()
            .map(|dto| ApiKey {
                key: dto.key,
                status: dto.status,
            })
            .collect();
        // An out-of-range active index is dropped rather than trusted
        let active = self.active_key_index.filter(|i| *i < keys.len());

        let selected_sources_by_article: BTreeMap<u32, BTreeSet<String>> = self
            .selected_sources_by_article
            .into_iter()
            .map(|entry| (entry.article_index, entry.sources.into_iter().collect()))
            .collect();

        StudioSettings {
            api_keys: ApiKeyRing { keys, active },
            global_persona: self.global_persona.into_domain(),
            page_personas: self
                .page_personas
                .into_iter()
                .map(|(page, persona)| (page, persona.into_domain()))
                .collect(),
            profiles: self
                .profiles
                .into_iter()
                .map(ProfileDto::into_domain)
                .collect(),
            preferences: self.preferences.into_domain(),
            articles: self
                .articles
                .into_iter()
                .map(ArticleDto::into_domain)
                .collect(),
            selected_sources_by_article,
        }
    }
}
