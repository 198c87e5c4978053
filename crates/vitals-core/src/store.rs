//! Record persistence.
//!
//! [`EntityStore`] is the storage contract the CLI works against.
//! [`JsonStore`] keeps one pretty-printed JSON array per collection
//! (`weights.json`, `lab_tests.json`, ...) under a root directory.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;
use vitals_model::{CandidateRecord, CanonicalRecord, EntityType};
use vitals_validate::validate;

use crate::error::{Result, StoreError};

/// Environment variable overriding the store directory.
pub const STORE_ENV_VAR: &str = "VITALS_STORE_DIR";

/// Directory used when neither a flag nor the environment names one.
pub const DEFAULT_STORE_DIR: &str = "vitals-data";

/// Resolves the store root: `VITALS_STORE_DIR`, else `./vitals-data`.
pub fn default_store_root() -> PathBuf {
    if let Ok(root) = std::env::var(STORE_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(DEFAULT_STORE_DIR)
}

/// Storage contract for canonical records.
pub trait EntityStore {
    /// All records of an entity, newest date first.
    fn list(&self, entity: EntityType) -> Result<Vec<CanonicalRecord>>;

    /// Stores a record, assigning a fresh id and timestamps.
    fn create(&self, record: CanonicalRecord) -> Result<CanonicalRecord>;

    /// Stores many records in one write per collection.
    fn insert_many(&self, records: Vec<CanonicalRecord>) -> Result<Vec<CanonicalRecord>>;

    /// Merges `patch` over a stored record and re-validates the result.
    fn update(&self, entity: EntityType, id: Uuid, patch: CandidateRecord)
    -> Result<CanonicalRecord>;

    fn delete(&self, entity: EntityType, id: Uuid) -> Result<()>;
}

/// File-backed store, one JSON file per collection.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of an entity's collection file.
    pub fn collection_path(&self, entity: EntityType) -> PathBuf {
        self.root.join(format!("{}.json", entity.collection()))
    }

    fn load(&self, entity: EntityType) -> Result<Vec<CanonicalRecord>> {
        let path = self.collection_path(entity);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&path).map_err(|e| StoreError::Io {
            operation: "read",
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Json { path, source: e })
    }

    /// Writes a collection through a temp file and rename.
    fn save(&self, entity: EntityType, records: &[CanonicalRecord]) -> Result<()> {
        let path = self.collection_path(entity);
        fs::create_dir_all(&self.root).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: self.root.clone(),
            source: e,
        })?;

        let bytes = serde_json::to_vec_pretty(records).map_err(|e| StoreError::Json {
            path: path.clone(),
            source: e,
        })?;

        let temp_path = path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| StoreError::AtomicWriteFailed {
            target_path: path.clone(),
            source: e,
        })?;
        debug!(entity = %entity, records = records.len(), path = %path.display(), "saved collection");
        Ok(())
    }
}

fn stamp_new(mut record: CanonicalRecord) -> CanonicalRecord {
    let now = Utc::now();
    let meta = record.meta_mut();
    meta.id = Some(Uuid::new_v4());
    meta.created_at = Some(now);
    meta.updated_at = Some(now);
    record
}

fn sort_by_date_desc(records: &mut [CanonicalRecord]) {
    records.sort_by(|a, b| b.date().cmp(a.date()));
}

impl EntityStore for JsonStore {
    fn list(&self, entity: EntityType) -> Result<Vec<CanonicalRecord>> {
        let mut records = self.load(entity)?;
        sort_by_date_desc(&mut records);
        Ok(records)
    }

    fn create(&self, record: CanonicalRecord) -> Result<CanonicalRecord> {
        let entity = record.entity_type();
        let mut records = self.load(entity)?;
        let record = stamp_new(record);
        records.push(record.clone());
        self.save(entity, &records)?;
        Ok(record)
    }

    fn insert_many(&self, records: Vec<CanonicalRecord>) -> Result<Vec<CanonicalRecord>> {
        let stamped: Vec<CanonicalRecord> = records.into_iter().map(stamp_new).collect();

        let mut by_entity: BTreeMap<&'static str, (EntityType, Vec<&CanonicalRecord>)> =
            BTreeMap::new();
        for record in &stamped {
            let entity = record.entity_type();
            by_entity
                .entry(entity.as_str())
                .or_insert_with(|| (entity, Vec::new()))
                .1
                .push(record);
        }

        for (entity, new_records) in by_entity.into_values() {
            let inserted = new_records.len();
            let mut existing = self.load(entity)?;
            existing.extend(new_records.into_iter().cloned());
            self.save(entity, &existing)?;
            info!(entity = %entity, inserted, total = existing.len(), "bulk insert complete");
        }
        Ok(stamped)
    }

    fn update(
        &self,
        entity: EntityType,
        id: Uuid,
        patch: CandidateRecord,
    ) -> Result<CanonicalRecord> {
        let mut records = self.load(entity)?;
        let slot = records
            .iter_mut()
            .find(|record| record.id() == Some(id))
            .ok_or(StoreError::NotFound { entity, id })?;

        let mut candidate = slot.to_candidate();
        candidate.merge(patch);
        candidate.insert("id", id.to_string());

        let mut updated = validate(entity, &candidate)?;
        let meta = updated.meta_mut();
        meta.created_at = slot.meta().created_at;
        meta.updated_at = Some(Utc::now());
        *slot = updated.clone();

        self.save(entity, &records)?;
        Ok(updated)
    }

    fn delete(&self, entity: EntityType, id: Uuid) -> Result<()> {
        let mut records = self.load(entity)?;
        let before = records.len();
        records.retain(|record| record.id() != Some(id));
        if records.len() == before {
            return Err(StoreError::NotFound { entity, id });
        }
        self.save(entity, &records)
    }
}
