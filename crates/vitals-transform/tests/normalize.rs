//! Tests for the row normalization pipeline.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use proptest::test_runner::Config;
use vitals_model::{EntityType, FieldValue, RawRecord};
use vitals_transform::normalization::aliases_for;
use vitals_transform::normalize;

fn raw(cells: &[(&str, &str)]) -> RawRecord {
    cells.iter().map(|(k, v)| (*k, *v)).collect()
}

// =========================================================================
// Alias resolution
// =========================================================================

#[test]
fn test_every_alias_is_equivalent_to_the_canonical_name() {
    let cases = [
        (EntityType::Weight, "menu", "oatmeal"),
        (EntityType::LabTest, "test_name", "HbA1c"),
        (EntityType::LabTest, "lab_name", "City Lab"),
        (EntityType::Medication, "name", "Metformin"),
        (EntityType::Diagnosis, "provider", "Dr. Levi"),
        (EntityType::Symptom, "feelings", "tired"),
        (EntityType::DoctorVisit, "doctor", "Dr. Levi"),
    ];
    for (entity, field, value) in cases {
        let canonical = normalize(entity, &raw(&[(field, value)]));
        for alias in aliases_for(entity, field) {
            let aliased = normalize(entity, &raw(&[(alias, value)]));
            assert_eq!(
                aliased.get(field),
                canonical.get(field),
                "{entity}: alias '{alias}' for {field}"
            );
        }
    }
}

#[test]
fn test_weight_aliases() {
    let output = normalize(
        EntityType::Weight,
        &raw(&[
            ("Date", "9/1/25"),
            ("Weight before meal (kg)", "70.5"),
            ("Meal", "breakfast"),
            ("Post Meal Symptoms", "none"),
            ("Calories", "420"),
        ]),
    );
    assert_eq!(output.text("entry_date"), Some("2025-09-01"));
    assert_eq!(output.number("value"), Some(70.5));
    assert_eq!(output.text("meal"), Some("breakfast"));
    assert_eq!(output.text("symptoms"), Some("none"));
    assert_eq!(output.number("calories"), Some(420.0));
}

#[test]
fn test_blank_alias_is_skipped() {
    let output = normalize(
        EntityType::Medication,
        &raw(&[("Medication", "  "), ("Medicine", "Aspirin")]),
    );
    assert_eq!(output.text("name"), Some("Aspirin"));
}

// =========================================================================
// Lab inference
// =========================================================================

#[test]
fn test_combined_result_is_split() {
    let output = normalize(
        EntityType::LabTest,
        &raw(&[
            ("Test Date", "2025-09-01"),
            ("Test Name", "Glucose"),
            ("Test Result", "5.4 mmol/L"),
        ]),
    );
    assert_eq!(output.number("value"), Some(5.4));
    assert_eq!(output.text("unit"), Some("mmol/L"));
    assert!(!output.is_populated("result_text"));
}

#[test]
fn test_combined_text_result() {
    let output = normalize(
        EntityType::LabTest,
        &raw(&[("Test Name", "Urine"), ("Test Result", "trace protein")]),
    );
    assert!(!output.is_populated("value"));
    assert_eq!(output.text("result_text"), Some("trace protein"));
}

#[test]
fn test_zero_value_blocks_split() {
    let output = normalize(
        EntityType::LabTest,
        &raw(&[("value", "0"), ("Test Result", "5.4 mmol/L")]),
    );
    assert_eq!(output.get("value"), Some(&FieldValue::Number(0.0)));
}

#[test]
fn test_procedure_inference() {
    let output = normalize(
        EntityType::LabTest,
        &raw(&[
            ("Date", "2025-02-10"),
            ("Procedure", "Colonoscopy"),
            ("Findings", "Small polyp removed"),
            ("Interpretation", "Benign"),
        ]),
    );
    assert_eq!(output.text("category"), Some("procedure"));
    assert_eq!(output.text("test_name"), Some("Colonoscopy"));
    assert_eq!(output.text("result_text"), Some("Small polyp removed"));
    assert_eq!(output.text("reference_notes"), Some("Benign"));
}

#[test]
fn test_blank_marker_column_is_not_a_procedure() {
    let output = normalize(
        EntityType::LabTest,
        &raw(&[("Test Name", "Glucose"), ("Findings", "")]),
    );
    assert!(!output.contains("category"));
}

#[test]
fn test_explicit_category_is_kept() {
    let output = normalize(
        EntityType::LabTest,
        &raw(&[("Procedure", "Biopsy"), ("category", "imaging")]),
    );
    assert_eq!(output.text("category"), Some("imaging"));
}

// =========================================================================
// Dates
// =========================================================================

#[test]
fn test_placeholder_date_becomes_null() {
    for placeholder in ["—", "-", "NA", "N/A", "n/a"] {
        let output = normalize(EntityType::Symptom, &raw(&[("Date", placeholder)]));
        assert_eq!(output.get("entry_date"), Some(&FieldValue::Null), "{placeholder}");
    }
}

#[test]
fn test_date_alias_beats_canonical_date() {
    let output = normalize(
        EntityType::Symptom,
        &raw(&[("entry_date", "2024-01-01"), ("Date", "2025-09-01")]),
    );
    assert_eq!(output.text("entry_date"), Some("2025-09-01"));
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn every_supported_layout_normalizes_to_iso(
        date in (1950_i32..2060, 1_u32..=12, 1_u32..=28)
            .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        layout in 0_usize..8,
    ) {
        let rendered = match layout {
            0 => date.format("%Y-%m-%d").to_string(),
            1 => date.format("%m/%d/%Y").to_string(),
            2 => date.format("%-m/%-d/%y").to_string(),
            3 => date.format("%m/%d/%y").to_string(),
            4 => date.format("%-d-%b-%y").to_string(),
            5 => date.format("%d-%b-%Y").to_string(),
            6 => date.format("%b %-d, %Y").to_string(),
            _ => date
                .and_hms_opt(8, 30, 0)
                .unwrap()
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
        };
        // Two-digit years pivot into 1969..=2068.
        prop_assume!(!matches!(layout, 2..=4) || date.year() >= 1969);
        let expected = date.format("%Y-%m-%d").to_string();
        let output = normalize(EntityType::Symptom, &raw(&[("Date", rendered.as_str())]));
        prop_assert_eq!(output.text("entry_date"), Some(expected.as_str()));
    }

    #[test]
    fn normalize_never_panics(
        cells in proptest::collection::vec(("[A-Za-z _()/]{1,20}", ".{0,20}"), 0..8),
    ) {
        let record: RawRecord = cells.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        for entity in EntityType::ALL {
            let _ = normalize(entity, &record);
        }
    }
}
