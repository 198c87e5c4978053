//! Schema validation for health-log records.
//!
//! - **reader**: typed field access over a [`CandidateRecord`]
//! - **entities**: one validator per entity type

pub mod entities;
pub mod reader;

pub use entities::{
    validate_diagnosis, validate_doctor_visit, validate_lab_test, validate_medication,
    validate_symptom, validate_weight,
};
pub use reader::FieldReader;

use vitals_model::{CandidateRecord, CanonicalRecord, EntityType, Result};

/// Validates a candidate against `entity`'s schema.
pub fn validate(entity: EntityType, record: &CandidateRecord) -> Result<CanonicalRecord> {
    Ok(match entity {
        EntityType::Weight => CanonicalRecord::Weight(validate_weight(record)?),
        EntityType::LabTest => CanonicalRecord::LabTest(validate_lab_test(record)?),
        EntityType::Medication => CanonicalRecord::Medication(validate_medication(record)?),
        EntityType::Diagnosis => CanonicalRecord::Diagnosis(validate_diagnosis(record)?),
        EntityType::Symptom => CanonicalRecord::Symptom(validate_symptom(record)?),
        EntityType::DoctorVisit => CanonicalRecord::DoctorVisit(validate_doctor_visit(record)?),
    })
}
