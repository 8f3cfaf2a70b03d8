//! Infrastructure layer of the Horus studio.
//!
//! Everything that touches a disk or a socket lives here: path resolution,
//! atomic JSON storage, the font store, durable settings persistence, the
//! settings export/import serializer, and the template file fetcher.

pub mod dto;
pub mod font_store;
pub mod paths;
pub mod settings_export;
pub mod settings_store;
pub mod storage;
pub mod template_fetcher;

pub use font_store::DirFontStore;
pub use paths::HorusPaths;
pub use settings_store::SettingsStore;
pub use template_fetcher::{HttpTemplateFetcher, TemplateFetcher};
