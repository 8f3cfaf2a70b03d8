//! Storage/export DTOs.
//!
//! The domain layer stays free of wire-format concerns; these types fix the
//! field names of the exportable settings document (camelCase, stable across
//! versions) and convert the containers JSON cannot represent natively.

mod settings;

pub use settings::{
    ApiKeyDto, ArticleDto, PersonaDto, PreferencesDto, ProfileDto, SelectedSourcesDto,
    SettingsDocumentV1, SCHEMA_VERSION,
};
