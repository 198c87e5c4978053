//! Canonical CSV export.

use csv::WriterBuilder;
use tracing::debug;
use vitals_model::{CanonicalRecord, EntityType, schema_for};

use crate::error::ExportError;

/// File name for an entity export, e.g. `lab_test.csv`.
pub fn export_file_name(entity: EntityType) -> String {
    format!("{}.csv", entity.as_str())
}

/// Writes records as CSV: a header of the entity's declared fields, then
/// one row per record. Ids and timestamps are not exported.
pub fn export_records(
    entity: EntityType,
    records: &[CanonicalRecord],
) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(schema_for(entity).field_names())?;

    for (index, record) in records.iter().enumerate() {
        let found = record.entity_type();
        if found != entity {
            return Err(ExportError::EntityMismatch {
                index,
                expected: entity,
                found,
            });
        }
        writer.write_record(record.field_values().iter().map(|(_, value)| value.render()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    debug!(entity = %entity, records = records.len(), "exported CSV");
    Ok(String::from_utf8(bytes)?)
}
