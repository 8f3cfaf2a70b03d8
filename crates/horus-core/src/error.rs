//! Error types for the Horus studio core.

use thiserror::Error;

/// A shared error type for the entire Horus application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Every variant is recoverable
/// at the UI boundary; none of them abort the process.
#[derive(Error, Debug, Clone)]
pub enum HorusError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template fetch error (network failure or non-2xx response)
    #[error("Failed to fetch '{path}': {reason}")]
    Fetch { path: String, reason: String },

    /// Duplicate-name conflict (font add, profile save)
    #[error("A {entity_type} named '{name}' already exists")]
    Conflict {
        entity_type: &'static str,
        name: String,
    },

    /// Keyed store used before it was opened
    #[error("{0} is not initialized; call open() first")]
    NotInitialized(&'static str),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HorusError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a Fetch error
    pub fn fetch(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::Conflict {
            entity_type,
            name: name.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a fetch error
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Check if this is a duplicate-name conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Check if this is a not-initialized error
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HorusError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HorusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for HorusError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for HorusError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, HorusError>`.
pub type Result<T> = std::result::Result<T, HorusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_display() {
        let err = HorusError::conflict("font", "Cairo");
        assert_eq!(err.to_string(), "A font named 'Cairo' already exists");
        assert!(err.is_conflict());
    }

    #[test]
    fn test_not_initialized_display() {
        let err = HorusError::NotInitialized("font store");
        assert!(err.to_string().contains("call open() first"));
        assert!(err.is_not_initialized());
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ bad").unwrap_err();
        let err: HorusError = parse_err.into();
        assert!(err.is_serialization());
    }
}
