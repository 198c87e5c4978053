//! Error types for imports and the record store.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;
use vitals_ingest::DecodeError;
use vitals_model::{EntityType, ValidationError, ValidationReason};

/// A row of an import failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {}: {field}: {reason}", .row_index + 1)]
pub struct RowValidationError {
    /// Zero-based data row index (the header is not counted).
    pub row_index: usize,
    pub field: String,
    pub reason: ValidationReason,
}

impl RowValidationError {
    pub fn new(row_index: usize, error: ValidationError) -> Self {
        Self {
            row_index,
            field: error.field,
            reason: error.reason,
        }
    }

    /// One-based row number, as shown to users.
    pub fn row_number(&self) -> usize {
        self.row_index + 1
    }
}

/// Why an import produced no records.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Row(#[from] RowValidationError),
}

/// Record store failure.
#[derive(Debug, Error)]
pub enum StoreError {
    // === File System Errors ===
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("failed to replace {target_path}: {source}")]
    AtomicWriteFailed {
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Content Errors ===
    #[error("invalid record file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {entity} record with id {id}")]
    NotFound { entity: EntityType, id: Uuid },

    #[error("updated record is invalid: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_display_is_one_based() {
        let err = RowValidationError::new(
            1,
            ValidationError::new("name", ValidationReason::Missing),
        );
        assert_eq!(err.row_number(), 2);
        assert_eq!(err.to_string(), "row 2: name: required field is missing");
        assert_eq!(
            ImportError::from(err).to_string(),
            "row 2: name: required field is missing"
        );
    }
}
