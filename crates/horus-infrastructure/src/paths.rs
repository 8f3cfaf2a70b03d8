//! Unified path management for Horus studio files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Horus.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/horus/             # Config directory
/// ├── config.toml              # Static studio configuration
/// └── settings.json            # Durable settings document
///
/// ~/.local/share/horus/        # Data directory (for large files)
/// └── fonts/                   # Font store (one file per font)
/// ```
pub struct HorusPaths;

impl HorusPaths {
    /// Returns the Horus configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/horus/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("horus"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the Horus data directory, used for larger files.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("horus"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the static configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the durable settings document.
    pub fn settings_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("settings.json"))
    }

    /// Returns the path to the font store directory.
    ///
    /// Font binaries live under the data directory because of their size.
    pub fn fonts_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("fonts"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = HorusPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("horus"));
    }

    #[test]
    fn test_config_file() {
        let config_file = HorusPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = HorusPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_settings_file() {
        let settings_file = HorusPaths::settings_file().unwrap();
        assert!(settings_file.ends_with("settings.json"));
        let config_dir = HorusPaths::config_dir().unwrap();
        assert!(settings_file.starts_with(&config_dir));
    }

    #[test]
    fn test_fonts_dir() {
        let fonts_dir = HorusPaths::fonts_dir().unwrap();
        assert!(fonts_dir.ends_with("fonts"));
        let data_dir = HorusPaths::data_dir().unwrap();
        assert!(fonts_dir.starts_with(&data_dir));
    }
}
