//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer.

use serde::{Deserialize, Serialize};

/// Static studio configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Base URL the template fetcher resolves relative paths against
    pub template_base_url: String,
    /// Default output language code
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_language() -> String {
    "ar".to_string()
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            template_base_url: "https://horus-studio.github.io/assets".to_string(),
            default_language: default_language(),
        }
    }
}
