//! Data model for the health log.
//!
//! - [`EntityType`]: the six record collections
//! - [`RawRecord`] / [`CandidateRecord`]: untyped rows before validation
//! - [`schema_for`]: declared fields per entity, in canonical order
//! - [`CanonicalRecord`]: validated, typed records

pub mod entity;
pub mod enums;
pub mod error;
pub mod records;
pub mod schema;
pub mod value;

pub use entity::EntityType;
pub use enums::{DiagnosisStatus, Meal, MedicationStatus};
pub use error::{Result, ValidationError, ValidationReason};
pub use records::{
    CanonicalRecord, DiagnosisEntry, DoctorVisitEntry, LabTestEntry, MedicationEntry,
    RecordMeta, SymptomEntry, WeightEntry,
};
pub use schema::{EntitySchema, FieldKind, FieldSpec, NumberConstraint, schema_for};
pub use value::{CandidateRecord, FieldValue, RawRecord, format_number};
