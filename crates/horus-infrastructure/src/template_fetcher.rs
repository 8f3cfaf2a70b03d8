//! Template file fetching.
//!
//! Catalog HTML bodies live as plain text files next to the deployed app;
//! fetching one is a fallible network operation, distinct from the pure
//! catalog lookup. A failed fetch must surface an error without mutating any
//! committed persona state; the caller only applies the text to its edit
//! buffer on success.

use async_trait::async_trait;

use horus_core::config::StudioConfig;
use horus_core::error::{HorusError, Result};

/// Fetches the raw text of a template file by relative path.
#[async_trait]
pub trait TemplateFetcher: Send + Sync + std::fmt::Debug {
    /// Retrieves the text content at `relative_path`.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: Raw text body (HTML or plain text)
    /// - `Err(HorusError::Fetch)`: Network failure or non-2xx response
    async fn fetch(&self, relative_path: &str) -> Result<String>;
}

/// HTTP-backed fetcher resolving relative paths against a base URL.
#[derive(Debug)]
pub struct HttpTemplateFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTemplateFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Builds the fetcher from the loaded studio configuration.
    pub fn from_config(config: &StudioConfig) -> Self {
        Self::new(config.template_base_url.clone())
    }
}

/// Joins a base URL and a relative path with exactly one slash between them.
fn join_url(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

#[async_trait]
impl TemplateFetcher for HttpTemplateFetcher {
    async fn fetch(&self, relative_path: &str) -> Result<String> {
        let url = join_url(&self.base_url, relative_path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HorusError::fetch(relative_path, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path = relative_path, %status, "template fetch failed");
            return Err(HorusError::fetch(relative_path, format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| HorusError::fetch(relative_path, e.to_string()))
    }
}
