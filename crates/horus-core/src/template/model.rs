//! Catalog record types.

use serde::{Deserialize, Serialize};

/// Discriminator used purely for grouping and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// A ready-made persona (instructions + optional template)
    Persona,
    /// An input protocol steering how source material is consumed
    Protocol,
    /// A bare HTML layout template
    Template,
}

/// An immutable catalog entry.
///
/// Serialize-only: entries exist solely as compile-time data and are never
/// read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HorusTemplate {
    /// Unique display name (exact-match lookup key)
    pub name: &'static str,
    /// One-line description shown in the picker
    pub description: &'static str,
    /// Persona/protocol instructions, empty for pure layout templates
    pub instructions: &'static str,
    /// HTML body with `__TOKEN__` placeholders, empty for pure personas
    pub html_template: &'static str,
    /// Emoji icon for the picker
    pub icon: &'static str,
    /// Grouping discriminator
    pub kind: TemplateKind,
}
