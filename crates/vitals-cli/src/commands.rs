//! Subcommand implementations.
//!
//! Each command works against an [`EntityStore`] and returns what it did;
//! printing is left to [`crate::summary`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span, trace};
use vitals_core::{
    EntityStore, ImportError, JsonStore, TimelineEvent, build_timeline, default_store_root,
    export_file_name, export_records, import_bytes,
};
use vitals_model::{CanonicalRecord, EntityType, ValidationReason};

use crate::logging::redact_value;

/// Outcome of `vitals import`.
#[derive(Debug)]
pub struct ImportOutcome {
    pub entity: EntityType,
    pub file: PathBuf,
    /// Records in file order; stored records carry their new ids.
    pub records: Vec<CanonicalRecord>,
    pub dry_run: bool,
}

impl ImportOutcome {
    /// Number of records written to the store.
    pub fn stored(&self) -> usize {
        if self.dry_run { 0 } else { self.records.len() }
    }
}

/// Outcome of `vitals export`.
#[derive(Debug)]
pub struct ExportOutcome {
    pub entity: EntityType,
    pub path: PathBuf,
    pub records: usize,
}

/// Opens the JSON store at `root`, or at the default location.
pub fn open_store(root: Option<&Path>) -> JsonStore {
    let root = root.map_or_else(default_store_root, Path::to_path_buf);
    debug!(root = %root.display(), "using store");
    JsonStore::new(root)
}

pub fn run_import(
    store: &impl EntityStore,
    file: &Path,
    entity: EntityType,
    dry_run: bool,
) -> Result<ImportOutcome> {
    let span = info_span!("import_file", entity = %entity, file = %file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let bytes = fs::read(file).with_context(|| format!("read {}", file.display()))?;
    let records = import_bytes(&bytes, entity).map_err(|error| import_failure(entity, error))?;
    for (row_index, record) in records.iter().enumerate() {
        trace!(row_index, date = redact_value(record.date()), "row accepted");
    }

    let records = if dry_run {
        info!(records = records.len(), "dry run, store left unchanged");
        records
    } else {
        store
            .insert_many(records)
            .map_err(|error| with_column_hint(entity, anyhow!(error)))
            .context("save imported records")?
    };

    info!(
        records = records.len(),
        dry_run,
        duration_ms = start.elapsed().as_millis(),
        "import command complete"
    );
    Ok(ImportOutcome {
        entity,
        file: file.to_path_buf(),
        records,
        dry_run,
    })
}

/// Writes the stored collection to `output` (a file, or a directory that
/// receives `<entity>.csv`). Without `output` the file lands in the current
/// directory.
pub fn run_export(
    store: &impl EntityStore,
    entity: EntityType,
    output: Option<&Path>,
) -> Result<ExportOutcome> {
    let records = store
        .list(entity)
        .with_context(|| format!("load {entity} records"))?;
    let csv = export_records(entity, &records).context("render CSV")?;

    let path = match output {
        Some(path) if path.is_dir() => path.join(export_file_name(entity)),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(export_file_name(entity)),
    };
    fs::write(&path, csv).with_context(|| format!("write {}", path.display()))?;
    info!(entity = %entity, records = records.len(), path = %path.display(), "export complete");
    Ok(ExportOutcome {
        entity,
        path,
        records: records.len(),
    })
}

pub fn run_list(store: &impl EntityStore, entity: EntityType) -> Result<Vec<CanonicalRecord>> {
    store
        .list(entity)
        .with_context(|| format!("load {entity} records"))
}

/// Loads every collection and merges it into one timeline.
pub fn run_timeline(store: &impl EntityStore) -> Result<Vec<TimelineEvent>> {
    let mut records = Vec::new();
    for entity in EntityType::ALL {
        let loaded = store
            .list(entity)
            .with_context(|| format!("load {entity} records"))?;
        debug!(entity = %entity, records = loaded.len(), "loaded collection");
        records.extend(loaded);
    }
    Ok(build_timeline(&records))
}

fn import_failure(entity: EntityType, error: ImportError) -> anyhow::Error {
    let missing_column = matches!(
        &error,
        ImportError::Row(row) if matches!(row.reason, ValidationReason::Missing | ValidationReason::Empty)
    );
    let error = anyhow!(error);
    if missing_column {
        column_hint(entity, error)
    } else {
        with_column_hint(entity, error)
    }
}

/// Adds the column hint when the message talks about columns.
fn with_column_hint(entity: EntityType, error: anyhow::Error) -> anyhow::Error {
    if error.to_string().to_lowercase().contains("column") {
        column_hint(entity, error)
    } else {
        error
    }
}

fn column_hint(entity: EntityType, error: anyhow::Error) -> anyhow::Error {
    error.context(format!(
        "check the file's columns (run `vitals fields --entity {entity}` for accepted headers)"
    ))
}
