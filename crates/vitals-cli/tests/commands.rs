//! Integration tests for the subcommands against a temporary store.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use vitals_cli::commands::{open_store, run_export, run_import, run_list, run_timeline};
use vitals_cli::summary::{fields_table, import_table, records_table, timeline_table};
use vitals_core::{EntityStore, JsonStore};
use vitals_model::EntityType;

struct Workspace {
    dir: TempDir,
    store: JsonStore,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = open_store(Some(dir.path().join("store").as_path()));
        Self { dir, store }
    }

    fn write_csv(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

const WEIGHTS: &str = "Date,Meal,Weight (kg),Menu\n\
                       9/1/25,breakfast,70.2,oats\n\
                       9/2/25,,69.9,\n";

#[test]
fn test_import_stores_records() {
    let ws = Workspace::new();
    let file = ws.write_csv("weights.csv", WEIGHTS);

    let outcome = run_import(&ws.store, &file, EntityType::Weight, false).unwrap();
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.stored(), 2);
    assert!(outcome.records.iter().all(|r| r.id().is_some()));

    let listed = run_list(&ws.store, EntityType::Weight).unwrap();
    let dates: Vec<&str> = listed.iter().map(|r| r.date()).collect();
    assert_eq!(dates, ["2025-09-02", "2025-09-01"]);
}

#[test]
fn test_dry_run_leaves_store_untouched() {
    let ws = Workspace::new();
    let file = ws.write_csv("weights.csv", WEIGHTS);

    let outcome = run_import(&ws.store, &file, EntityType::Weight, true).unwrap();
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.stored(), 0);
    assert!(outcome.records.iter().all(|r| r.id().is_none()));
    assert!(ws.store.list(EntityType::Weight).unwrap().is_empty());
    assert!(!ws.store.collection_path(EntityType::Weight).exists());
}

#[test]
fn test_failed_import_stores_nothing() {
    let ws = Workspace::new();
    let file = ws.write_csv(
        "meds.csv",
        "name,start_date,status\n\
         Metformin,2025-09-01,active\n\
         ,2025-09-01,active\n",
    );

    let error = run_import(&ws.store, &file, EntityType::Medication, false).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("row 2: name: required field is missing"));
    assert!(message.contains("vitals fields --entity medication"));
    assert!(ws.store.list(EntityType::Medication).unwrap().is_empty());
}

#[test]
fn test_missing_file() {
    let ws = Workspace::new();
    let error = run_import(
        &ws.store,
        &ws.dir.path().join("nope.csv"),
        EntityType::Symptom,
        false,
    )
    .unwrap_err();
    assert!(error.to_string().starts_with("read "));
}

#[test]
fn test_export_writes_canonical_csv() {
    let ws = Workspace::new();
    let file = ws.write_csv("weights.csv", WEIGHTS);
    run_import(&ws.store, &file, EntityType::Weight, false).unwrap();

    let out_dir = ws.dir.path().join("out");
    fs::create_dir_all(&out_dir).unwrap();
    let outcome = run_export(&ws.store, EntityType::Weight, Some(&out_dir)).unwrap();
    assert_eq!(outcome.records, 2);
    assert_eq!(outcome.path, out_dir.join("weight.csv"));

    let csv = fs::read_to_string(&outcome.path).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r"
    entry_date,meal,value,unit,source,menu,symptoms,calories,fat,protein,notes
    2025-09-02,other,69.9,kg,,,,,,,
    2025-09-01,breakfast,70.2,kg,,oats,,,,,
    ");
}

#[test]
fn test_export_to_named_file_reimports() {
    let ws = Workspace::new();
    let file = ws.write_csv(
        "labs.csv",
        "Test Date,Test Name,Test Result,Lab\n\
         2025-09-01,Glucose,5.4 mmol/L,City Lab\n",
    );
    let imported = run_import(&ws.store, &file, EntityType::LabTest, false).unwrap();

    let target = ws.dir.path().join("labs-export.csv");
    run_export(&ws.store, EntityType::LabTest, Some(&target)).unwrap();

    let other = Workspace::new();
    let reimported = run_import(&other.store, &target, EntityType::LabTest, true).unwrap();
    assert_eq!(reimported.records.len(), 1);
    assert_eq!(
        reimported.records[0].field_values(),
        imported.records[0].field_values()
    );
}

#[test]
fn test_timeline_spans_collections() {
    let ws = Workspace::new();
    let weights = ws.write_csv("weights.csv", WEIGHTS);
    let visits = ws.write_csv("visits.csv", "Visit Date,Doctor\n2025-09-03,Dr. Levi\n");
    run_import(&ws.store, &weights, EntityType::Weight, false).unwrap();
    run_import(&ws.store, &visits, EntityType::DoctorVisit, false).unwrap();

    let events = run_timeline(&ws.store).unwrap();
    let dates: Vec<&str> = events.iter().map(|e| e.entry_date.as_str()).collect();
    assert_eq!(dates, ["2025-09-03", "2025-09-02", "2025-09-01"]);

    let rendered = timeline_table(&events).force_no_tty().to_string();
    assert!(rendered.contains("Visit with Dr. Levi"));
    assert!(rendered.contains("Weight 69.9 kg"));
}

#[test]
fn test_tables_render() {
    let ws = Workspace::new();
    let file = ws.write_csv("weights.csv", WEIGHTS);
    let outcome = run_import(&ws.store, &file, EntityType::Weight, true).unwrap();

    let summary = import_table(&outcome).force_no_tty().to_string();
    assert!(summary.contains("Weight & meals"));
    assert!(summary.contains("2025-09-01"));
    assert!(summary.contains("2025-09-02"));

    let records = records_table(EntityType::Weight, &outcome.records)
        .force_no_tty()
        .to_string();
    assert!(records.contains("breakfast"));
    assert!(records.contains("70.2"));

    let fields = fields_table(EntityType::Weight).force_no_tty().to_string();
    assert!(fields.contains("Weight (kg)"));
    assert!(fields.contains("breakfast | lunch | dinner | other"));
}
