//! API key ring.
//!
//! A mutable list of API keys, at most one of which is active. Status is
//! advisory metadata set by the consuming caller; this layer never verifies
//! a key against the provider.

use serde::{Deserialize, Serialize};

/// Advisory key health reported by the consuming caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStatus {
    Unknown,
    Valid,
    Invalid,
    QuotaExceeded,
}

impl Default for KeyStatus {
    fn default() -> Self {
        KeyStatus::Unknown
    }
}

/// One stored API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub key: String,
    #[serde(default)]
    pub status: KeyStatus,
}

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            status: KeyStatus::Unknown,
        }
    }
}

/// The ordered key list plus the optional active selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRing {
    #[serde(default)]
    pub keys: Vec<ApiKey>,
    /// Index into `keys`; `None` when no key is active
    #[serde(default)]
    pub active: Option<usize>,
}

impl ApiKeyRing {
    /// Appends a key. The first key added becomes active.
    pub fn add(&mut self, key: impl Into<String>) {
        self.keys.push(ApiKey::new(key));
        if self.active.is_none() {
            self.active = Some(self.keys.len() - 1);
        }
    }

    /// Removes a key by value. Returns whether a key was removed.
    ///
    /// The active selection follows the surviving key, or clears when the
    /// active key itself was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(pos) = self.keys.iter().position(|k| k.key == key) else {
            return false;
        };
        self.keys.remove(pos);
        self.active = match self.active {
            Some(active) if active == pos => None,
            Some(active) if active > pos => Some(active - 1),
            other => other,
        };
        true
    }

    /// Marks a key as active by value. Returns whether the key exists.
    pub fn set_active(&mut self, key: &str) -> bool {
        match self.keys.iter().position(|k| k.key == key) {
            Some(pos) => {
                self.active = Some(pos);
                true
            }
            None => false,
        }
    }

    /// Returns the active key, if any.
    pub fn active_key(&self) -> Option<&ApiKey> {
        self.active.and_then(|i| self.keys.get(i))
    }

    /// Records advisory status for a key. Returns whether the key exists.
    pub fn mark(&mut self, key: &str, status: KeyStatus) -> bool {
        match self.keys.iter_mut().find(|k| k.key == key) {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_key_becomes_active() {
        let mut ring = ApiKeyRing::default();
        ring.add("key-a");
        ring.add("key-b");
        assert_eq!(ring.active_key().unwrap().key, "key-a");
    }

    #[test]
    fn test_remove_active_key_clears_selection() {
        let mut ring = ApiKeyRing::default();
        ring.add("key-a");
        ring.add("key-b");
        assert!(ring.remove("key-a"));
        assert!(ring.active_key().is_none());
        assert_eq!(ring.keys.len(), 1);
    }

    #[test]
    fn test_remove_earlier_key_shifts_active_index() {
        let mut ring = ApiKeyRing::default();
        ring.add("key-a");
        ring.add("key-b");
        assert!(ring.set_active("key-b"));
        assert!(ring.remove("key-a"));
        assert_eq!(ring.active_key().unwrap().key, "key-b");
    }

    #[test]
    fn test_mark_status_is_advisory() {
        let mut ring = ApiKeyRing::default();
        ring.add("key-a");
        assert!(ring.mark("key-a", KeyStatus::QuotaExceeded));
        assert_eq!(ring.keys[0].status, KeyStatus::QuotaExceeded);
        assert!(!ring.mark("missing", KeyStatus::Valid));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut ring = ApiKeyRing::default();
        ring.add("key-a");
        assert!(!ring.remove("missing"));
        assert_eq!(ring.keys.len(), 1);
    }
}
