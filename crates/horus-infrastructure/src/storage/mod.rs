//! Storage primitives: atomic JSON files and the config loader.

pub mod atomic_json;
pub mod config_storage;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use config_storage::{ConfigStorage, ConfigStorageError};
