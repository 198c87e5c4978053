//! CSV import pipeline.
//!
//! # Stages
//!
//! 1. **Decode** - bytes to raw rows keyed by header
//! 2. **Normalize** - aliases, coercion, dates, lab inference
//! 3. **Validate** - entity schema; the first failing row aborts the import
//!
//! The pipeline is all-or-nothing and performs no I/O: callers decide what
//! to do with the records (store them, export them, show a dry run).

use std::time::Instant;

use tracing::{debug, info, info_span};
use vitals_ingest::decode;
use vitals_model::{CanonicalRecord, EntityType, RawRecord};
use vitals_transform::normalize;
use vitals_validate::validate;

use crate::error::{ImportError, RowValidationError};

/// Imports CSV bytes as records of `entity`, in file order.
pub fn import_bytes(bytes: &[u8], entity: EntityType) -> Result<Vec<CanonicalRecord>, ImportError> {
    let span = info_span!("import", entity = %entity);
    let _guard = span.enter();
    let start = Instant::now();

    let rows = decode(bytes)?;
    debug!(rows = rows.len(), "decode complete");

    let records = import_rows(entity, &rows)?;
    info!(
        entity = %entity,
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "import complete"
    );
    Ok(records)
}

/// Normalizes and validates already decoded rows.
pub fn import_rows(
    entity: EntityType,
    rows: &[RawRecord],
) -> Result<Vec<CanonicalRecord>, RowValidationError> {
    rows.iter()
        .enumerate()
        .map(|(row_index, raw)| {
            let candidate = normalize(entity, raw);
            validate(entity, &candidate).map_err(|err| {
                debug!(row_index, field = %err.field, "row failed validation");
                RowValidationError::new(row_index, err)
            })
        })
        .collect()
}
