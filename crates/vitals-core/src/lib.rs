//! Health-log core: import pipeline, record store and timeline.
//!
//! - **pipeline**: CSV bytes → validated records (all or nothing)
//! - **store**: the [`EntityStore`] contract and its JSON implementation
//! - **timeline**: a unified feed over all collections
//!
//! CSV export lives in `vitals-ingest` and is re-exported here so callers
//! need a single dependency.

pub mod error;
pub mod pipeline;
pub mod store;
pub mod timeline;

pub use error::{ImportError, RowValidationError, StoreError};
pub use pipeline::{import_bytes, import_rows};
pub use store::{DEFAULT_STORE_DIR, EntityStore, JsonStore, STORE_ENV_VAR, default_store_root};
pub use timeline::{TimelineCategory, TimelineEvent, build_timeline};
pub use vitals_ingest::{DecodeError, ExportError, export_file_name, export_records};
