//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. Two variants are recoverable by
//! contract: a persisted blob that fails to parse and a durable write that
//! fails after the in-memory state has already changed.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// A persisted blob exists but does not match its schema
    #[error("Failed to read persisted '{key}': {message}")]
    Deserialization { key: String, message: String },

    /// A durable write failed after the in-memory update was applied
    #[error("Failed to persist '{key}': {message}")]
    PersistenceWrite { key: String, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input rejected by entry validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage backend errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TrackerError {
    /// Create a deserialization error for a storage key
    pub fn deserialization(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Deserialization {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create a persistence write error for a storage key
    pub fn persistence_write(key: impl Into<String>, message: impl ToString) -> Self {
        Self::PersistenceWrite {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if the operation still took effect in memory despite this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Deserialization { .. } | Self::PersistenceWrite { .. }
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
