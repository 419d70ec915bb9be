//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  rusqlite::Error / poisoned lock                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError ──────────┐                                               │
//! │                         ▼                                               │
//! │  BasketError ───────► StoreError ← what add()/clear() return            │
//! │                                                                         │
//! │  toml / io errors ──► ConfigError ← what WidgetConfig::load returns     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::{BasketError, CatalogError};
use thiserror::Error;

// =============================================================================
// Storage Error
// =============================================================================

/// Failures of the storage slot itself.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The SQLite backend failed.
    #[error("SQLite storage failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Another user of the slot panicked while holding it.
    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Store Error
// =============================================================================

/// Errors returned by [`crate::BasketStore`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The add was rejected by a basket rule. State is unchanged.
    #[error(transparent)]
    Rejected(#[from] BasketError),

    /// The basket could not be written or deleted.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The basket could not be encoded.
    #[error("Failed to encode basket: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// The rule that rejected the add, if this is a rejection.
    pub fn rejection(&self) -> Option<&BasketError> {
        match self {
            StoreError::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Config Error
// =============================================================================

/// Failures loading or saving [`crate::WidgetConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to open storage: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("No config path available")]
    NoPath,
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_is_transparent() {
        let err: StoreError = BasketError::NoProduct.into();
        assert_eq!(
            err.to_string(),
            "Please add a product first before adding add-ons."
        );
        assert_eq!(err.rejection(), Some(&BasketError::NoProduct));
    }

    #[test]
    fn test_storage_error_is_not_a_rejection() {
        let err: StoreError = StorageError::Poisoned.into();
        assert!(err.rejection().is_none());
        assert_eq!(err.to_string(), "Storage error: Storage lock poisoned");
    }
}
