//! Declarative field layout for each entity type.
//!
//! The declaration order is the canonical column order used by export.
//! `id` and the server timestamps are record metadata and are not declared
//! here.

use crate::entity::EntityType;
use crate::enums::{DiagnosisStatus, Meal, MedicationStatus};

/// Sign constraint on a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberConstraint {
    Any,
    /// Strictly greater than zero.
    Positive,
    /// Zero or greater.
    NonNegative,
}

/// Value type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Calendar date, `YYYY-MM-DD` once normalized.
    Date,
    Number(NumberConstraint),
    Enum(&'static [&'static str]),
    Boolean,
}

/// One declared field of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Value applied when the field is absent (never when it is invalid).
    pub default: Option<&'static str>,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn with_default(mut self, value: &'static str) -> Self {
        self.required = true;
        self.default = Some(value);
        self
    }

    pub fn is_date(&self) -> bool {
        matches!(self.kind, FieldKind::Date)
    }
}

/// Field layout of one entity.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub entity: EntityType,
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }
}

const TEXT: FieldKind = FieldKind::Text;
const DATE: FieldKind = FieldKind::Date;
const NUMBER: FieldKind = FieldKind::Number(NumberConstraint::Any);
const POSITIVE: FieldKind = FieldKind::Number(NumberConstraint::Positive);
const NON_NEGATIVE: FieldKind = FieldKind::Number(NumberConstraint::NonNegative);

const WEIGHT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("entry_date", DATE).required(),
    FieldSpec::new("meal", FieldKind::Enum(Meal::VALUES)).with_default("other"),
    FieldSpec::new("value", POSITIVE),
    FieldSpec::new("unit", TEXT).with_default("kg"),
    FieldSpec::new("source", TEXT),
    FieldSpec::new("menu", TEXT),
    FieldSpec::new("symptoms", TEXT),
    FieldSpec::new("calories", NON_NEGATIVE),
    FieldSpec::new("fat", NON_NEGATIVE),
    FieldSpec::new("protein", NON_NEGATIVE),
    FieldSpec::new("notes", TEXT),
];

const LAB_TEST_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("entry_date", DATE).required(),
    FieldSpec::new("test_name", TEXT).required(),
    FieldSpec::new("value", NUMBER),
    FieldSpec::new("unit", TEXT),
    FieldSpec::new("result_text", TEXT),
    FieldSpec::new("lab_name", TEXT),
    FieldSpec::new("problematic", TEXT),
    FieldSpec::new("category", TEXT),
    FieldSpec::new("reference_notes", TEXT),
    FieldSpec::new("ref_low", NUMBER),
    FieldSpec::new("ref_high", NUMBER),
    FieldSpec::new("notes", TEXT),
];

const MEDICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("entry_date", DATE).required(),
    FieldSpec::new("prescribed_by", TEXT),
    FieldSpec::new("name", TEXT).required(),
    FieldSpec::new("dose", POSITIVE),
    FieldSpec::new("dose_unit", TEXT),
    FieldSpec::new("dose_count", POSITIVE),
    FieldSpec::new("frequency", TEXT),
    FieldSpec::new("start_date", DATE).required(),
    FieldSpec::new("end_date", DATE),
    FieldSpec::new("stop_date", DATE),
    FieldSpec::new("status", FieldKind::Enum(MedicationStatus::VALUES)).required(),
    FieldSpec::new("notes", TEXT),
];

const DIAGNOSIS_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("entry_date", DATE).required(),
    FieldSpec::new("name", TEXT).required(),
    FieldSpec::new("diagnosis_date", DATE).required(),
    FieldSpec::new("status", FieldKind::Enum(DiagnosisStatus::VALUES)).required(),
    FieldSpec::new("provider", TEXT),
    FieldSpec::new("notes", TEXT),
];

const SYMPTOM_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("entry_date", DATE).required(),
    FieldSpec::new("feelings", TEXT).required(),
    FieldSpec::new("symptoms", TEXT),
    FieldSpec::new("notes", TEXT),
];

const DOCTOR_VISIT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("visit_date", DATE).required(),
    FieldSpec::new("doctor", TEXT).required(),
    FieldSpec::new("diagnosis_summary", TEXT),
    FieldSpec::new("medications_summary", TEXT),
    FieldSpec::new("completed", FieldKind::Boolean),
    FieldSpec::new("weight_value", NUMBER),
    FieldSpec::new("weight_unit", TEXT),
    FieldSpec::new("notes", TEXT),
];

/// Returns the field layout for an entity.
pub fn schema_for(entity: EntityType) -> EntitySchema {
    let fields = match entity {
        EntityType::Weight => WEIGHT_FIELDS,
        EntityType::LabTest => LAB_TEST_FIELDS,
        EntityType::Medication => MEDICATION_FIELDS,
        EntityType::Diagnosis => DIAGNOSIS_FIELDS,
        EntityType::Symptom => SYMPTOM_FIELDS,
        EntityType::DoctorVisit => DOCTOR_VISIT_FIELDS,
    };
    EntitySchema { entity, fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_declares_its_date_field_first() {
        for entity in EntityType::ALL {
            let schema = schema_for(entity);
            let first = schema.fields[0];
            assert_eq!(first.name, entity.date_field());
            assert!(first.required);
            assert!(first.is_date());
        }
    }

    #[test]
    fn defaults_imply_required() {
        let schema = schema_for(EntityType::Weight);
        let meal = schema.field("meal").unwrap();
        assert_eq!(meal.default, Some("other"));
        assert!(meal.required);
        assert_eq!(schema.field("unit").unwrap().default, Some("kg"));
        assert!(!schema.declares("test_name"));
    }
}
