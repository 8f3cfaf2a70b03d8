//! Settings serializer: export/import of the portable settings document.
//!
//! Export snapshots every tracked setting into one JSON document; import
//! replaces the in-memory settings wholesale. Import is atomic: a document
//! that fails to parse, misses a required field, or carries an unsupported
//! schema version is rejected in full with no partial application.
//!
//! Round-trip law: `import(export(S))` is observationally equal to `S` for
//! every tracked field, including the integer-keyed source-selection sets
//! that cross the JSON boundary as explicit pairs.

use horus_core::StudioSettings;
use horus_core::error::{HorusError, Result};

use crate::dto::{SCHEMA_VERSION, SettingsDocumentV1};

/// Snapshots the settings into an export document.
pub fn export(settings: &StudioSettings) -> SettingsDocumentV1 {
    settings.into()
}

/// Snapshots the settings into a pretty-printed JSON string, ready to be
/// offered to the user as a download.
pub fn export_to_string(settings: &StudioSettings) -> Result<String> {
    let document = export(settings);
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parses an export document and reconstructs the full settings graph.
///
/// # Returns
///
/// - `Ok(StudioSettings)`: Document parsed and every container rebuilt
/// - `Err(HorusError::Serialization)`: Malformed JSON or missing fields
/// - `Err(HorusError::Config)`: Unsupported schema version
pub fn import(json: &str) -> Result<StudioSettings> {
    let document: SettingsDocumentV1 = serde_json::from_str(json)?;

    if document.schema_version != SCHEMA_VERSION {
        return Err(HorusError::config(format!(
            "Unsupported settings schema version {} (expected {})",
            document.schema_version, SCHEMA_VERSION
        )));
    }

    Ok(document.into_domain())
}
