//! Error types for CSV decoding and export.

use thiserror::Error;
use vitals_model::EntityType;

/// Errors that make an input file unreadable as a whole.
#[derive(Debug, Error)]
pub enum DecodeError {
    // === Encoding Errors ===
    /// UTF-16 input (detected by its byte-order mark).
    #[error("unsupported encoding {encoding}: save the file as UTF-8")]
    UnsupportedEncoding { encoding: &'static str },

    /// Input is not valid UTF-8.
    #[error("input is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    // === CSV Structure Errors ===
    /// Empty input, or a header row without any column names.
    #[error("CSV has no header row")]
    MissingHeader,

    /// Malformed CSV.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A record of another entity type was passed in.
    #[error("record {index} is a {found}, expected {expected}")]
    EntityMismatch {
        index: usize,
        expected: EntityType,
        found: EntityType,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for decoding.
pub type Result<T> = std::result::Result<T, DecodeError>;
