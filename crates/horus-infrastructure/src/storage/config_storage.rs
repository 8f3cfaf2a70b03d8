//! Studio configuration file storage.
//!
//! Read-only loader for `config.toml` (template base URL, default
//! language).

use horus_core::config::StudioConfig;
use std::fs;
use std::path::PathBuf;

/// Errors that can occur during config storage operations.
#[derive(Debug)]
pub enum ConfigStorageError {
    /// Configuration file not found.
    NotFound(PathBuf),
    /// File I/O error.
    IoError(std::io::Error),
    /// TOML parsing error.
    ParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigStorageError::NotFound(path) => {
                write!(f, "Configuration file not found at: {}", path.display())
            }
            ConfigStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigStorageError::ParseError(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigStorageError {}

impl From<std::io::Error> for ConfigStorageError {
    fn from(e: std::io::Error) -> Self {
        ConfigStorageError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigStorageError {
    fn from(e: toml::de::Error) -> Self {
        ConfigStorageError::ParseError(e)
    }
}

/// Storage for the studio configuration file (config.toml).
///
/// Responsibilities:
/// - Load config.toml from the studio config directory
/// - Parse TOML into the StudioConfig domain model
///
/// Does NOT:
/// - Write or modify config files (read-only)
/// - Validate URLs or reachability
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a new ConfigStorage at the default location
    /// (`~/.config/horus/config.toml`).
    pub fn new() -> Result<Self, ConfigStorageError> {
        let path = crate::paths::HorusPaths::config_file().map_err(|e| {
            ConfigStorageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                e.to_string(),
            ))
        })?;
        Ok(Self { path })
    }

    /// Creates a new ConfigStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the studio configuration from the TOML file.
    ///
    /// # Returns
    ///
    /// - `Ok(StudioConfig)`: Successfully loaded and parsed
    /// - `Err(ConfigStorageError::NotFound)`: File doesn't exist
    /// - `Err(ConfigStorageError::IoError)`: Failed to read file
    /// - `Err(ConfigStorageError::ParseError)`: Invalid TOML
    pub fn load(&self) -> Result<StudioConfig, ConfigStorageError> {
        if !self.path.exists() {
            return Err(ConfigStorageError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;

        Ok(config)
    }

    /// Loads the configuration, falling back to defaults when the file is
    /// absent. Parse and I/O failures still surface as errors.
    pub fn load_or_default(&self) -> Result<StudioConfig, ConfigStorageError> {
        match self.load() {
            Ok(config) => Ok(config),
            Err(ConfigStorageError::NotFound(_)) => Ok(StudioConfig::default()),
            Err(e) => Err(e),
        }
    }

    /// Returns the path to the config file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
