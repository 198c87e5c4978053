//! Accepted header aliases per canonical field.
//!
//! Lists are ordered: when several alias columns are present the first one
//! with a value wins. A canonical field already populated under its own
//! name is never overwritten by an alias.

use vitals_model::EntityType;

/// Ordered alternative headers for one canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    pub field: &'static str,
    pub aliases: &'static [&'static str],
}

const fn alias(field: &'static str, aliases: &'static [&'static str]) -> FieldAlias {
    FieldAlias { field, aliases }
}

/// Columns searched for the primary date, before falling back to the
/// canonical date fields.
pub const DATE_ALIASES: &[&str] = &["Date", "Test Date", "date", "test_date"];

/// Doctor-visit exports label the date differently.
pub const VISIT_DATE_ALIASES: &[&str] = &["Visit Date", "Date", "date", "visit_date"];

/// Combined "value + unit" result column of lab exports.
pub const TEST_RESULT_COLUMN: &str = "Test Result";

/// Raw columns whose presence marks a lab row as a procedure.
pub const PROCEDURE_MARKERS: &[&str] = &["Procedure", "Findings", "Interpretation"];

pub const RESULT_TYPE_ALIASES: &[&str] = &["Result type", "result_type"];

pub const RESULT_TEXT_ALIASES: &[&str] = &[
    "Result text (if non-numeric)",
    "result_text",
    TEST_RESULT_COLUMN,
    "Findings",
];

/// Aliases from the lab-export field guide. Applied to any entity that
/// declares the field.
const COMMON_ALIASES: &[FieldAlias] = &[
    alias("test_name", &["Test name (e.g. HbA1c)", "Test Name", "Procedure"]),
    alias("lab_name", &["Lab name", "Lab"]),
    alias(
        "reference_notes",
        &[
            "Interpretation / Reference notes",
            "Test Interpretation",
            "Interpretation",
        ],
    ),
    alias("problematic", &["Problematic", "Problematic (No/Slight/Yes)"]),
    alias("unit", &["Unit"]),
    alias("ref_low", &["Ref low"]),
    alias("ref_high", &["Ref high"]),
    alias("value", &["Value (numeric)"]),
    alias("notes", &["Notes"]),
];

const WEIGHT_ALIASES: &[FieldAlias] = &[
    alias("value", &["Weight (kg)", "Weight before meal (kg)", "Weight"]),
    alias("meal", &["Meal"]),
    alias("menu", &["Menu"]),
    alias("symptoms", &["Post Meal Symptoms", "Symptoms"]),
    alias("source", &["Source"]),
    alias("calories", &["Calories"]),
    alias("fat", &["Fat"]),
    alias("protein", &["Protein"]),
];

const MEDICATION_ALIASES: &[FieldAlias] = &[
    alias("name", &["Medication", "Medicine", "Name"]),
    alias("prescribed_by", &["Prescribed by", "Doctor"]),
    alias("dose", &["Dose"]),
    alias("dose_unit", &["Dose unit"]),
    alias("dose_count", &["Dose count"]),
    alias("frequency", &["Frequency"]),
    alias("start_date", &["Start date"]),
    alias("end_date", &["End date"]),
    alias("stop_date", &["Stop date"]),
    alias("status", &["Status"]),
];

const DIAGNOSIS_ALIASES: &[FieldAlias] = &[
    alias("name", &["Diagnosis", "Name"]),
    alias("diagnosis_date", &["Diagnosis date"]),
    alias("status", &["Status"]),
    alias("provider", &["Provider", "Doctor"]),
];

const SYMPTOM_ALIASES: &[FieldAlias] = &[
    alias("feelings", &["Feelings", "Feeling"]),
    alias("symptoms", &["Symptoms"]),
];

const DOCTOR_VISIT_ALIASES: &[FieldAlias] = &[
    alias("doctor", &["Doctor"]),
    alias("diagnosis_summary", &["Diagnosis / Comments", "Diagnosis"]),
    alias("medications_summary", &["Medicines Prescribed", "Medications"]),
    alias("completed", &["Completed"]),
    alias("weight_value", &["Weight (kg)", "Weight"]),
    alias("weight_unit", &["Weight unit"]),
];

fn entity_aliases(entity: EntityType) -> &'static [FieldAlias] {
    match entity {
        EntityType::Weight => WEIGHT_ALIASES,
        EntityType::LabTest => &[],
        EntityType::Medication => MEDICATION_ALIASES,
        EntityType::Diagnosis => DIAGNOSIS_ALIASES,
        EntityType::Symptom => SYMPTOM_ALIASES,
        EntityType::DoctorVisit => DOCTOR_VISIT_ALIASES,
    }
}

/// Alias groups for an entity: entity-specific groups first, then the
/// shared lab-guide groups.
pub fn alias_groups(entity: EntityType) -> impl Iterator<Item = &'static FieldAlias> {
    entity_aliases(entity).iter().chain(COMMON_ALIASES.iter())
}

/// Date columns searched for the entity's primary date.
pub fn date_aliases(entity: EntityType) -> &'static [&'static str] {
    match entity {
        EntityType::DoctorVisit => VISIT_DATE_ALIASES,
        _ => DATE_ALIASES,
    }
}

/// Every accepted alias for a field, in lookup order.
pub fn aliases_for(entity: EntityType, field: &str) -> Vec<&'static str> {
    alias_groups(entity)
        .filter(|group| group.field == field)
        .flat_map(|group| group.aliases.iter().copied())
        .collect()
}
