//! Validated, entity-typed records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::EntityType;
use crate::enums::{DiagnosisStatus, Meal, MedicationStatus};
use crate::schema::schema_for;
use crate::value::{CandidateRecord, FieldValue};

/// Identity and server-side bookkeeping shared by every stored record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RecordMeta {
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub entry_date: String,
    pub meal: Meal,
    pub value: Option<f64>,
    pub unit: String,
    pub source: Option<String>,
    pub menu: Option<String>,
    pub symptoms: Option<String>,
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    pub protein: Option<f64>,
    pub notes: Option<String>,
}

impl WeightEntry {
    fn get(&self, field: &str) -> FieldValue {
        match field {
            "entry_date" => self.entry_date.as_str().into(),
            "meal" => self.meal.as_str().into(),
            "value" => self.value.into(),
            "unit" => self.unit.as_str().into(),
            "source" => self.source.clone().into(),
            "menu" => self.menu.clone().into(),
            "symptoms" => self.symptoms.clone().into(),
            "calories" => self.calories.into(),
            "fat" => self.fat.into(),
            "protein" => self.protein.into(),
            "notes" => self.notes.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTestEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub entry_date: String,
    pub test_name: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub result_text: Option<String>,
    pub lab_name: Option<String>,
    /// Free text ("No", "Slight", "Yes", ...), not an enumeration.
    pub problematic: Option<String>,
    /// `"procedure"` for imaging/endoscopy style findings.
    pub category: Option<String>,
    pub reference_notes: Option<String>,
    pub ref_low: Option<f64>,
    pub ref_high: Option<f64>,
    pub notes: Option<String>,
}

impl LabTestEntry {
    pub fn is_procedure(&self) -> bool {
        self.category.as_deref() == Some("procedure")
    }

    /// True when a numeric result falls outside the reference range.
    pub fn is_out_of_range(&self) -> bool {
        let Some(value) = self.value else {
            return false;
        };
        self.ref_low.is_some_and(|low| value < low) || self.ref_high.is_some_and(|high| value > high)
    }

    fn get(&self, field: &str) -> FieldValue {
        match field {
            "entry_date" => self.entry_date.as_str().into(),
            "test_name" => self.test_name.as_str().into(),
            "value" => self.value.into(),
            "unit" => self.unit.clone().into(),
            "result_text" => self.result_text.clone().into(),
            "lab_name" => self.lab_name.clone().into(),
            "problematic" => self.problematic.clone().into(),
            "category" => self.category.clone().into(),
            "reference_notes" => self.reference_notes.clone().into(),
            "ref_low" => self.ref_low.into(),
            "ref_high" => self.ref_high.into(),
            "notes" => self.notes.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub entry_date: String,
    pub prescribed_by: Option<String>,
    pub name: String,
    pub dose: Option<f64>,
    pub dose_unit: Option<String>,
    pub dose_count: Option<f64>,
    pub frequency: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub stop_date: Option<String>,
    pub status: MedicationStatus,
    pub notes: Option<String>,
}

impl MedicationEntry {
    fn get(&self, field: &str) -> FieldValue {
        match field {
            "entry_date" => self.entry_date.as_str().into(),
            "prescribed_by" => self.prescribed_by.clone().into(),
            "name" => self.name.as_str().into(),
            "dose" => self.dose.into(),
            "dose_unit" => self.dose_unit.clone().into(),
            "dose_count" => self.dose_count.into(),
            "frequency" => self.frequency.clone().into(),
            "start_date" => self.start_date.as_str().into(),
            "end_date" => self.end_date.clone().into(),
            "stop_date" => self.stop_date.clone().into(),
            "status" => self.status.as_str().into(),
            "notes" => self.notes.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub entry_date: String,
    pub name: String,
    pub diagnosis_date: String,
    pub status: DiagnosisStatus,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

impl DiagnosisEntry {
    fn get(&self, field: &str) -> FieldValue {
        match field {
            "entry_date" => self.entry_date.as_str().into(),
            "name" => self.name.as_str().into(),
            "diagnosis_date" => self.diagnosis_date.as_str().into(),
            "status" => self.status.as_str().into(),
            "provider" => self.provider.clone().into(),
            "notes" => self.notes.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub entry_date: String,
    pub feelings: String,
    pub symptoms: Option<String>,
    pub notes: Option<String>,
}

impl SymptomEntry {
    fn get(&self, field: &str) -> FieldValue {
        match field {
            "entry_date" => self.entry_date.as_str().into(),
            "feelings" => self.feelings.as_str().into(),
            "symptoms" => self.symptoms.clone().into(),
            "notes" => self.notes.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorVisitEntry {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub visit_date: String,
    pub doctor: String,
    pub diagnosis_summary: Option<String>,
    pub medications_summary: Option<String>,
    pub completed: Option<bool>,
    pub weight_value: Option<f64>,
    pub weight_unit: Option<String>,
    pub notes: Option<String>,
}

impl DoctorVisitEntry {
    fn get(&self, field: &str) -> FieldValue {
        match field {
            "visit_date" => self.visit_date.as_str().into(),
            "doctor" => self.doctor.as_str().into(),
            "diagnosis_summary" => self.diagnosis_summary.clone().into(),
            "medications_summary" => self.medications_summary.clone().into(),
            "completed" => self.completed.into(),
            "weight_value" => self.weight_value.into(),
            "weight_unit" => self.weight_unit.clone().into(),
            "notes" => self.notes.clone().into(),
            _ => FieldValue::Null,
        }
    }
}

/// A validated record of any entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum CanonicalRecord {
    Weight(WeightEntry),
    LabTest(LabTestEntry),
    Medication(MedicationEntry),
    Diagnosis(DiagnosisEntry),
    Symptom(SymptomEntry),
    DoctorVisit(DoctorVisitEntry),
}

impl CanonicalRecord {
    pub fn entity_type(&self) -> EntityType {
        match self {
            CanonicalRecord::Weight(_) => EntityType::Weight,
            CanonicalRecord::LabTest(_) => EntityType::LabTest,
            CanonicalRecord::Medication(_) => EntityType::Medication,
            CanonicalRecord::Diagnosis(_) => EntityType::Diagnosis,
            CanonicalRecord::Symptom(_) => EntityType::Symptom,
            CanonicalRecord::DoctorVisit(_) => EntityType::DoctorVisit,
        }
    }

    pub fn meta(&self) -> &RecordMeta {
        match self {
            CanonicalRecord::Weight(entry) => &entry.meta,
            CanonicalRecord::LabTest(entry) => &entry.meta,
            CanonicalRecord::Medication(entry) => &entry.meta,
            CanonicalRecord::Diagnosis(entry) => &entry.meta,
            CanonicalRecord::Symptom(entry) => &entry.meta,
            CanonicalRecord::DoctorVisit(entry) => &entry.meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut RecordMeta {
        match self {
            CanonicalRecord::Weight(entry) => &mut entry.meta,
            CanonicalRecord::LabTest(entry) => &mut entry.meta,
            CanonicalRecord::Medication(entry) => &mut entry.meta,
            CanonicalRecord::Diagnosis(entry) => &mut entry.meta,
            CanonicalRecord::Symptom(entry) => &mut entry.meta,
            CanonicalRecord::DoctorVisit(entry) => &mut entry.meta,
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.meta().id
    }

    /// The record's primary date (`entry_date`, or `visit_date` for visits).
    pub fn date(&self) -> &str {
        match self {
            CanonicalRecord::Weight(entry) => &entry.entry_date,
            CanonicalRecord::LabTest(entry) => &entry.entry_date,
            CanonicalRecord::Medication(entry) => &entry.entry_date,
            CanonicalRecord::Diagnosis(entry) => &entry.entry_date,
            CanonicalRecord::Symptom(entry) => &entry.entry_date,
            CanonicalRecord::DoctorVisit(entry) => &entry.visit_date,
        }
    }

    pub fn notes(&self) -> Option<&str> {
        match self {
            CanonicalRecord::Weight(entry) => entry.notes.as_deref(),
            CanonicalRecord::LabTest(entry) => entry.notes.as_deref(),
            CanonicalRecord::Medication(entry) => entry.notes.as_deref(),
            CanonicalRecord::Diagnosis(entry) => entry.notes.as_deref(),
            CanonicalRecord::Symptom(entry) => entry.notes.as_deref(),
            CanonicalRecord::DoctorVisit(entry) => entry.notes.as_deref(),
        }
    }

    /// Value of a declared field; `Null` for unknown names and metadata.
    pub fn get(&self, field: &str) -> FieldValue {
        match self {
            CanonicalRecord::Weight(entry) => entry.get(field),
            CanonicalRecord::LabTest(entry) => entry.get(field),
            CanonicalRecord::Medication(entry) => entry.get(field),
            CanonicalRecord::Diagnosis(entry) => entry.get(field),
            CanonicalRecord::Symptom(entry) => entry.get(field),
            CanonicalRecord::DoctorVisit(entry) => entry.get(field),
        }
    }

    /// Declared fields in canonical order, without id or timestamps.
    pub fn field_values(&self) -> Vec<(&'static str, FieldValue)> {
        schema_for(self.entity_type())
            .field_names()
            .map(|name| (name, self.get(name)))
            .collect()
    }

    /// Declared fields (plus `id` when set) as an untyped record, suitable
    /// for patching and re-validation.
    pub fn to_candidate(&self) -> CandidateRecord {
        let mut candidate: CandidateRecord = self.field_values().into_iter().collect();
        if let Some(id) = self.id() {
            candidate.insert("id", id.to_string());
        }
        candidate
    }
}
