//! Persona domain model.
//!
//! Two scopes exist at runtime: one global persona and zero-or-more
//! page-scoped personas (one per content-generation page). A page persona
//! with both fields empty is inactive, and resolution falls back to the
//! global persona.

use serde::{Deserialize, Serialize};

/// The scope a persona applies to.
///
/// `Global` is the app-wide default; `Page` overrides it for a single
/// content-generation screen, keyed by that page's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonaScope {
    /// App-wide default persona
    Global,
    /// Persona for one content-generation page
    Page(String),
}

impl PersonaScope {
    /// Convenience constructor for a page scope.
    pub fn page(id: impl Into<String>) -> Self {
        PersonaScope::Page(id.into())
    }
}

/// A persona: free-text instructions plus an HTML content template.
///
/// Mutated only via an explicit user save; the edit buffer held by the
/// persona service is distinct from the committed value stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// Free-text system instructions for the generative model
    #[serde(default)]
    pub instructions: String,
    /// HTML template the model is asked to fill
    #[serde(default)]
    pub html_template: String,
}

impl PersonaConfig {
    pub fn new(instructions: impl Into<String>, html_template: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            html_template: html_template.into(),
        }
    }

    /// A page persona with both fields empty (after trimming) is inactive
    /// and does not shadow the global persona.
    pub fn is_inactive(&self) -> bool {
        self.instructions.trim().is_empty() && self.html_template.trim().is_empty()
    }

    /// Resolves the effective persona for a page.
    ///
    /// Order: the page persona if active, otherwise the global persona if
    /// active, otherwise the empty default (which makes the composer fall
    /// back to its generic instruction string).
    pub fn resolve<'a>(page: Option<&'a PersonaConfig>, global: &'a PersonaConfig) -> &'a Self {
        match page {
            Some(p) if !p.is_inactive() => p,
            _ if !global.is_inactive() => global,
            _ => Self::empty_ref(),
        }
    }

    fn empty_ref() -> &'static Self {
        static EMPTY: once_cell::sync::Lazy<PersonaConfig> =
            once_cell::sync::Lazy::new(PersonaConfig::default);
        &EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_when_both_fields_blank() {
        let persona = PersonaConfig::new("   ", "\n\t");
        assert!(persona.is_inactive());
    }

    #[test]
    fn test_active_with_template_only() {
        let persona = PersonaConfig::new("", "<article></article>");
        assert!(!persona.is_inactive());
    }

    #[test]
    fn test_resolve_prefers_active_page_persona() {
        let page = PersonaConfig::new("Write like a sports desk", "");
        let global = PersonaConfig::new("Write like a newsroom", "");
        let resolved = PersonaConfig::resolve(Some(&page), &global);
        assert_eq!(resolved.instructions, "Write like a sports desk");
    }

    #[test]
    fn test_resolve_falls_back_to_global() {
        let page = PersonaConfig::default();
        let global = PersonaConfig::new("Write like a newsroom", "");
        let resolved = PersonaConfig::resolve(Some(&page), &global);
        assert_eq!(resolved.instructions, "Write like a newsroom");
    }

    #[test]
    fn test_resolve_empty_when_nothing_active() {
        let global = PersonaConfig::default();
        let resolved = PersonaConfig::resolve(None, &global);
        assert!(resolved.is_inactive());
    }
}
