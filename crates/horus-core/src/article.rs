//! Generated article records.
//!
//! Articles are produced by the (external) generation call. This layer never
//! creates or validates them; it only stores, retrieves, and exports them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored generation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Article title as returned by the model
    pub title: String,
    /// Full article HTML
    pub html: String,
    /// URL slug
    pub slug: String,
    /// SEO meta description
    pub meta_description: String,
    /// SEO meta keywords
    pub meta_keywords: String,
    /// User rating, 1-5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// User favorite flag
    #[serde(default)]
    pub is_favorite: bool,
    /// When the article was generated
    pub created_at: DateTime<Utc>,
}
