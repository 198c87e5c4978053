//! Unified, date-ordered feed over every stored collection.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitals_model::{CanonicalRecord, format_number};

/// Timeline grouping. Doctor visits are shown as `visit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineCategory {
    Weight,
    LabTest,
    Medication,
    Diagnosis,
    Visit,
    Symptom,
}

impl TimelineCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineCategory::Weight => "weight",
            TimelineCategory::LabTest => "lab_test",
            TimelineCategory::Medication => "medication",
            TimelineCategory::Diagnosis => "diagnosis",
            TimelineCategory::Visit => "visit",
            TimelineCategory::Symptom => "symptom",
        }
    }
}

impl fmt::Display for TimelineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: Option<Uuid>,
    pub entry_date: String,
    pub category: TimelineCategory,
    pub title: String,
    pub subtitle: String,
    pub notes: Option<String>,
}

impl TimelineEvent {
    pub fn from_record(record: &CanonicalRecord) -> Self {
        let (category, title, subtitle) = describe(record);
        Self {
            id: record.id(),
            entry_date: record.date().to_string(),
            category,
            title,
            subtitle,
            notes: record.notes().map(str::to_string),
        }
    }
}

/// Joins the present parts with `" · "`.
fn join_parts<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

fn with_unit(value: Option<f64>, unit: Option<&str>) -> Option<String> {
    value.map(|value| match unit {
        Some(unit) => format!("{} {unit}", format_number(value)),
        None => format_number(value),
    })
}

fn describe(record: &CanonicalRecord) -> (TimelineCategory, String, String) {
    match record {
        CanonicalRecord::Weight(entry) => {
            let title = with_unit(entry.value, Some(entry.unit.as_str()))
                .map_or_else(|| "Weight".to_string(), |value| format!("Weight {value}"));
            let subtitle = join_parts([Some(entry.meal.as_str()), entry.menu.as_deref()]);
            (TimelineCategory::Weight, title, subtitle)
        }
        CanonicalRecord::LabTest(entry) => {
            let result = with_unit(entry.value, entry.unit.as_deref());
            let subtitle = join_parts([
                result.as_deref().or(entry.result_text.as_deref()),
                entry.lab_name.as_deref(),
                entry.is_out_of_range().then_some("out of range"),
            ]);
            (TimelineCategory::LabTest, entry.test_name.clone(), subtitle)
        }
        CanonicalRecord::Medication(entry) => {
            let dose = with_unit(entry.dose, entry.dose_unit.as_deref());
            let subtitle = join_parts([
                dose.as_deref(),
                entry.frequency.as_deref(),
                Some(entry.status.as_str()),
            ]);
            (TimelineCategory::Medication, entry.name.clone(), subtitle)
        }
        CanonicalRecord::Diagnosis(entry) => {
            let subtitle = join_parts([Some(entry.status.as_str()), entry.provider.as_deref()]);
            (TimelineCategory::Diagnosis, entry.name.clone(), subtitle)
        }
        CanonicalRecord::Symptom(entry) => (
            TimelineCategory::Symptom,
            entry.feelings.clone(),
            join_parts([entry.symptoms.as_deref()]),
        ),
        CanonicalRecord::DoctorVisit(entry) => (
            TimelineCategory::Visit,
            format!("Visit with {}", entry.doctor),
            join_parts([entry.diagnosis_summary.as_deref()]),
        ),
    }
}

/// Builds timeline events for `records`, newest date first. Records sharing
/// a date keep their input order.
pub fn build_timeline(records: &[CanonicalRecord]) -> Vec<TimelineEvent> {
    let mut events: Vec<TimelineEvent> = records.iter().map(TimelineEvent::from_record).collect();
    events.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
    events
}
