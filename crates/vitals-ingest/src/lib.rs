//! CSV ingestion for the health log.
//!
//! - **Decoding**: bytes → [`RawRecord`](vitals_model::RawRecord) rows, one
//!   per data line, keyed by header
//! - **Export**: canonical records → CSV with the entity's declared columns

mod csv;
mod error;

// === Error Types ===
pub use error::{DecodeError, ExportError, Result};

// === CSV Reading ===
pub use self::csv::{decode, validate_encoding};

// === CSV Writing ===
pub use self::csv::{export_file_name, export_records};
