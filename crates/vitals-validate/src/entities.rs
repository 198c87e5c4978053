//! One validator per entity type.
//!
//! Struct fields are read in schema declaration order, so the first failing
//! field is the one reported. `id` is checked last.

use vitals_model::{
    CandidateRecord, DiagnosisEntry, DiagnosisStatus, DoctorVisitEntry, LabTestEntry, Meal,
    MedicationEntry, MedicationStatus, NumberConstraint, Result, SymptomEntry, WeightEntry,
};

use crate::reader::FieldReader;

use NumberConstraint::{Any, NonNegative, Positive};

pub fn validate_weight(record: &CandidateRecord) -> Result<WeightEntry> {
    let r = FieldReader::new(record);
    Ok(WeightEntry {
        entry_date: r.required_date("entry_date")?,
        meal: r.enum_or_default("meal", Meal::VALUES, Meal::Other)?,
        value: r.optional_number("value", Positive)?,
        unit: r.text_or_default("unit", "kg")?,
        source: r.optional_text("source")?,
        menu: r.optional_text("menu")?,
        symptoms: r.optional_text("symptoms")?,
        calories: r.optional_number("calories", NonNegative)?,
        fat: r.optional_number("fat", NonNegative)?,
        protein: r.optional_number("protein", NonNegative)?,
        notes: r.optional_text("notes")?,
        meta: r.meta()?,
    })
}

pub fn validate_lab_test(record: &CandidateRecord) -> Result<LabTestEntry> {
    let r = FieldReader::new(record);
    Ok(LabTestEntry {
        entry_date: r.required_date("entry_date")?,
        test_name: r.required_text("test_name")?,
        value: r.optional_number("value", Any)?,
        unit: r.optional_text("unit")?,
        result_text: r.optional_text("result_text")?,
        lab_name: r.optional_text("lab_name")?,
        problematic: r.optional_text("problematic")?,
        category: r.optional_text("category")?,
        reference_notes: r.optional_text("reference_notes")?,
        ref_low: r.optional_number("ref_low", Any)?,
        ref_high: r.optional_number("ref_high", Any)?,
        notes: r.optional_text("notes")?,
        meta: r.meta()?,
    })
}

pub fn validate_medication(record: &CandidateRecord) -> Result<MedicationEntry> {
    let r = FieldReader::new(record);
    Ok(MedicationEntry {
        entry_date: r.required_date("entry_date")?,
        prescribed_by: r.optional_text("prescribed_by")?,
        name: r.required_text("name")?,
        dose: r.optional_number("dose", Positive)?,
        dose_unit: r.optional_text("dose_unit")?,
        dose_count: r.optional_number("dose_count", Positive)?,
        frequency: r.optional_text("frequency")?,
        start_date: r.required_date("start_date")?,
        end_date: r.optional_date("end_date")?,
        stop_date: r.optional_date("stop_date")?,
        status: r.required_enum::<MedicationStatus>("status", MedicationStatus::VALUES)?,
        notes: r.optional_text("notes")?,
        meta: r.meta()?,
    })
}

pub fn validate_diagnosis(record: &CandidateRecord) -> Result<DiagnosisEntry> {
    let r = FieldReader::new(record);
    Ok(DiagnosisEntry {
        entry_date: r.required_date("entry_date")?,
        name: r.required_text("name")?,
        diagnosis_date: r.required_date("diagnosis_date")?,
        status: r.required_enum::<DiagnosisStatus>("status", DiagnosisStatus::VALUES)?,
        provider: r.optional_text("provider")?,
        notes: r.optional_text("notes")?,
        meta: r.meta()?,
    })
}

pub fn validate_symptom(record: &CandidateRecord) -> Result<SymptomEntry> {
    let r = FieldReader::new(record);
    Ok(SymptomEntry {
        entry_date: r.required_date("entry_date")?,
        feelings: r.required_text("feelings")?,
        symptoms: r.optional_text("symptoms")?,
        notes: r.optional_text("notes")?,
        meta: r.meta()?,
    })
}

pub fn validate_doctor_visit(record: &CandidateRecord) -> Result<DoctorVisitEntry> {
    let r = FieldReader::new(record);
    Ok(DoctorVisitEntry {
        visit_date: r.required_date("visit_date")?,
        doctor: r.required_text("doctor")?,
        diagnosis_summary: r.optional_text("diagnosis_summary")?,
        medications_summary: r.optional_text("medications_summary")?,
        completed: r.optional_bool("completed")?,
        weight_value: r.optional_number("weight_value", Any)?,
        weight_unit: r.optional_text("weight_unit")?,
        notes: r.optional_text("notes")?,
        meta: r.meta()?,
    })
}
