//! Persona service.
//!
//! Owns the committed persona per scope plus one uncommitted edit buffer per
//! scope. Committing is an in-memory swap followed by persistence; no
//! partial-write state is ever observable through `load`. Concurrent commits
//! to the same scope are not coordinated: last commit wins, which is the
//! intended behavior for a single-user local tool.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use horus_core::composer;
use horus_core::error::Result;
use horus_core::persona::{PersonaConfig, PersonaScope};

use horus_infrastructure::SettingsStore;
use horus_infrastructure::TemplateFetcher;

use crate::SharedSettings;
use crate::notify::StatusNotifier;

/// Service managing committed personas and their edit buffers.
pub struct PersonaService {
    settings: SharedSettings,
    store: Arc<SettingsStore>,
    fetcher: Arc<dyn TemplateFetcher>,
    notifier: Arc<dyn StatusNotifier>,
    /// Uncommitted edit buffers, one per scope
    drafts: Mutex<HashMap<PersonaScope, PersonaConfig>>,
    /// Per-scope fetch generation; stale template responses are discarded
    fetch_generations: Mutex<HashMap<PersonaScope, u64>>,
}

impl PersonaService {
    pub fn new(
        settings: SharedSettings,
        store: Arc<SettingsStore>,
        fetcher: Arc<dyn TemplateFetcher>,
        notifier: Arc<dyn StatusNotifier>,
    ) -> Self {
        Self {
            settings,
            store,
            fetcher,
            notifier,
            drafts: Mutex::new(HashMap::new()),
            fetch_generations: Mutex::new(HashMap::new()),
        }
    }

    // Every critical section is a single map operation, so the guarded data
    // is coherent even after a panic; recover instead of propagating poison.
    fn drafts(&self) -> MutexGuard<'_, HashMap<PersonaScope, PersonaConfig>> {
        self.drafts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn generations(&self) -> MutexGuard<'_, HashMap<PersonaScope, u64>> {
        self.fetch_generations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the committed persona for a scope. Never fails; a scope that
    /// was never committed reads as the empty persona.
    pub async fn load(&self, scope: &PersonaScope) -> PersonaConfig {
        let settings = self.settings.read().await;
        match scope {
            PersonaScope::Global => settings.global_persona.clone(),
            PersonaScope::Page(page) => settings
                .page_personas
                .get(page)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Resolves the effective persona for a page scope: the page persona if
    /// active, else the global persona, else the empty default.
    pub async fn resolve(&self, scope: &PersonaScope) -> PersonaConfig {
        let settings = self.settings.read().await;
        match scope {
            PersonaScope::Global => settings.global_persona.clone(),
            PersonaScope::Page(page) => {
                PersonaConfig::resolve(settings.page_personas.get(page), &settings.global_persona)
                    .clone()
            }
        }
    }

    /// Composes the full instruction payload for one generation request on
    /// this scope, using the effective persona.
    pub async fn compose_for(&self, scope: &PersonaScope, preserve_placeholders: bool) -> String {
        let persona = self.resolve(scope).await;
        composer::compose(
            &persona.instructions,
            &persona.html_template,
            preserve_placeholders,
        )
    }

    /// Seeds the scope's edit buffer from the committed value.
    pub async fn begin_edit(&self, scope: &PersonaScope) {
        let committed = self.load(scope).await;
        self.drafts().insert(scope.clone(), committed);
    }

    /// Returns the scope's current edit buffer, if editing began.
    pub fn draft(&self, scope: &PersonaScope) -> Option<PersonaConfig> {
        self.drafts().get(scope).cloned()
    }

    /// Atomically replaces the committed value with `draft` and persists.
    ///
    /// Subsequent `load` calls observe the new value. Emits a user-visible
    /// status notification on success.
    pub async fn commit(&self, scope: &PersonaScope, draft: PersonaConfig) -> Result<()> {
        let snapshot = {
            let mut settings = self.settings.write().await;
            match scope {
                PersonaScope::Global => settings.global_persona = draft.clone(),
                PersonaScope::Page(page) => {
                    settings.page_personas.insert(page.clone(), draft.clone());
                }
            }
            settings.clone()
        };

        self.store.save(&snapshot)?;
        self.drafts().insert(scope.clone(), draft);

        tracing::info!(?scope, "persona committed");
        self.notifier.notify("Persona saved");
        Ok(())
    }

    /// Reverts the scope's edit buffer to the last committed value. The
    /// committed state is untouched.
    pub async fn discard(&self, scope: &PersonaScope) {
        let committed = self.load(scope).await;
        self.drafts().insert(scope.clone(), committed);
    }

    /// Fetches a catalog template body into the scope's edit buffer.
    ///
    /// Only the edit buffer is touched, and only on success; a fetch failure
    /// surfaces as an error with committed state intact. A response that was
    /// superseded by a newer fetch for the same scope is discarded.
    pub async fn load_template_into_draft(
        &self,
        scope: &PersonaScope,
        relative_path: &str,
    ) -> Result<()> {
        let generation = {
            let mut generations = self.generations();
            let entry = generations.entry(scope.clone()).or_insert(0);
            *entry += 1;
            *entry
        };

        // Snapshot before the await so the draft can be seeded without
        // re-locking the settings afterwards
        let committed = self.load(scope).await;

        let text = self.fetcher.fetch(relative_path).await?;

        let current = self.generations().get(scope).copied().unwrap_or(0);
        if current != generation {
            tracing::debug!(?scope, relative_path, "stale template fetch discarded");
            return Ok(());
        }

        let mut drafts = self.drafts();
        let draft = drafts.entry(scope.clone()).or_insert(committed);
        draft.html_template = text;
        Ok(())
    }
}
