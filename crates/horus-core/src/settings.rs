//! The in-memory settings aggregate.
//!
//! One `StudioSettings` instance is owned by the top-level application
//! object and passed explicitly to the services that need it. Everything in
//! it must round-trip through the settings serializer without loss,
//! including the integer-keyed source-selection map that JSON cannot
//! represent natively.

use std::collections::{BTreeMap, BTreeSet};

use crate::api_key::ApiKeyRing;
use crate::article::GeneratedArticle;
use crate::persona::PersonaConfig;
use crate::profile::{PagePreferences, Profile};

/// Every durable, exportable setting tracked by the studio.
///
/// Fonts are deliberately absent: their binaries live in the dedicated font
/// store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudioSettings {
    /// The API key ring
    pub api_keys: ApiKeyRing,
    /// The app-wide default persona
    pub global_persona: PersonaConfig,
    /// Page-scoped persona overrides, keyed by page id
    pub page_personas: BTreeMap<String, PersonaConfig>,
    /// Saved generation profiles
    pub profiles: Vec<Profile>,
    /// Current (unsaved-as-profile) generation preferences
    pub preferences: PagePreferences,
    /// Stored generation results
    pub articles: Vec<GeneratedArticle>,
    /// Per-article selected source URLs, keyed by article index
    pub selected_sources_by_article: BTreeMap<u32, BTreeSet<String>>,
}
