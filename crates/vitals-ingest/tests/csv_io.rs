//! Decoding and export through the public API.

use proptest::prelude::*;
use vitals_ingest::{ExportError, decode, export_file_name, export_records};
use vitals_model::{
    CanonicalRecord, EntityType, LabTestEntry, Meal, RecordMeta, SymptomEntry, WeightEntry,
};

fn weight(date: &str, value: Option<f64>, notes: Option<&str>) -> CanonicalRecord {
    CanonicalRecord::Weight(WeightEntry {
        meta: RecordMeta::default(),
        entry_date: date.to_string(),
        meal: Meal::Breakfast,
        value,
        unit: "kg".to_string(),
        source: None,
        menu: None,
        symptoms: None,
        calories: Some(0.0),
        fat: None,
        protein: None,
        notes: notes.map(str::to_string),
    })
}

#[test]
fn test_export_weights() {
    let records = vec![
        weight("2025-09-01", Some(70.0), Some("after run, tired")),
        weight("2025-09-02", Some(69.8), None),
    ];
    let csv = export_records(EntityType::Weight, &records).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r#"
    entry_date,meal,value,unit,source,menu,symptoms,calories,fat,protein,notes
    2025-09-01,breakfast,70,kg,,,,0,,,"after run, tired"
    2025-09-02,breakfast,69.8,kg,,,,0,,,
    "#);
}

#[test]
fn test_export_empty_is_header_only() {
    let csv = export_records(EntityType::Symptom, &[]).unwrap();
    assert_eq!(csv, "entry_date,feelings,symptoms,notes\n");
}

#[test]
fn test_export_lab_quoting() {
    let record = CanonicalRecord::LabTest(LabTestEntry {
        meta: RecordMeta::default(),
        entry_date: "2025-09-01".to_string(),
        test_name: "Lipid \"panel\"".to_string(),
        value: Some(5.4),
        unit: Some("mmol/L".to_string()),
        result_text: None,
        lab_name: None,
        problematic: Some("No".to_string()),
        category: None,
        reference_notes: Some("line one\nline two".to_string()),
        ref_low: Some(0.0),
        ref_high: Some(5.2),
        notes: None,
    });
    let csv = export_records(EntityType::LabTest, &[record]).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r#"
    entry_date,test_name,value,unit,result_text,lab_name,problematic,category,reference_notes,ref_low,ref_high,notes
    2025-09-01,"Lipid ""panel""",5.4,mmol/L,,,No,,"line one
    line two",0,5.2,
    "#);
}

#[test]
fn test_export_rejects_other_entities() {
    let symptom = CanonicalRecord::Symptom(SymptomEntry {
        meta: RecordMeta::default(),
        entry_date: "2025-09-01".to_string(),
        feelings: "fine".to_string(),
        symptoms: None,
        notes: None,
    });
    let err = export_records(
        EntityType::Weight,
        &[weight("2025-09-01", None, None), symptom],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ExportError::EntityMismatch {
            index: 1,
            expected: EntityType::Weight,
            found: EntityType::Symptom,
        }
    ));
}

#[test]
fn test_export_file_name() {
    assert_eq!(export_file_name(EntityType::LabTest), "lab_test.csv");
    assert_eq!(export_file_name(EntityType::DoctorVisit), "doctor_visit.csv");
}

#[test]
fn test_exported_csv_decodes() {
    let records = vec![weight("2025-09-01", Some(70.0), Some("a \"quoted\", note"))];
    let csv = export_records(EntityType::Weight, &records).unwrap();
    let rows = decode(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("notes"), Some("a \"quoted\", note"));
    assert_eq!(rows[0].get("value"), Some("70"));
    assert_eq!(rows[0].get("source"), Some(""));
}

proptest! {
    #[test]
    fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode(&bytes);
    }
}
