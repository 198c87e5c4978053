//! Entity types handled by the health log.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record collection a CSV file or stored row belongs to.
///
/// Procedures have no entity of their own; they are lab tests with
/// `category = "procedure"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Weight,
    LabTest,
    Medication,
    Diagnosis,
    Symptom,
    DoctorVisit,
}

impl EntityType {
    /// Every entity type, in display order.
    pub const ALL: [EntityType; 6] = [
        EntityType::Weight,
        EntityType::LabTest,
        EntityType::Medication,
        EntityType::Diagnosis,
        EntityType::Symptom,
        EntityType::DoctorVisit,
    ];

    /// Singular snake_case name (`lab_test`).
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Weight => "weight",
            EntityType::LabTest => "lab_test",
            EntityType::Medication => "medication",
            EntityType::Diagnosis => "diagnosis",
            EntityType::Symptom => "symptom",
            EntityType::DoctorVisit => "doctor_visit",
        }
    }

    /// Name of the backing collection (`lab_tests`).
    pub fn collection(&self) -> &'static str {
        match self {
            EntityType::Weight => "weights",
            EntityType::LabTest => "lab_tests",
            EntityType::Medication => "medications",
            EntityType::Diagnosis => "diagnoses",
            EntityType::Symptom => "symptoms",
            EntityType::DoctorVisit => "doctor_visits",
        }
    }

    /// Field holding the record's primary calendar date.
    pub fn date_field(&self) -> &'static str {
        match self {
            EntityType::DoctorVisit => "visit_date",
            _ => "entry_date",
        }
    }

    /// Human-readable label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Weight => "Weight & meals",
            EntityType::LabTest => "Lab tests & procedures",
            EntityType::Medication => "Medications",
            EntityType::Diagnosis => "Diagnoses",
            EntityType::Symptom => "Symptom check-ins",
            EntityType::DoctorVisit => "Doctor visits",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    /// Accepts the singular name, the collection name, and hyphenated or
    /// mixed-case spellings of either.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        EntityType::ALL
            .into_iter()
            .find(|entity| entity.as_str() == normalized || entity.collection() == normalized)
            .ok_or_else(|| format!("Unknown entity type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singular_and_collection_names() {
        assert_eq!("lab_test".parse::<EntityType>(), Ok(EntityType::LabTest));
        assert_eq!("lab_tests".parse::<EntityType>(), Ok(EntityType::LabTest));
        assert_eq!("Doctor-Visit".parse::<EntityType>(), Ok(EntityType::DoctorVisit));
        assert_eq!("diagnoses".parse::<EntityType>(), Ok(EntityType::Diagnosis));
        assert!("procedure".parse::<EntityType>().is_err());
    }

    #[test]
    fn date_field_per_entity() {
        assert_eq!(EntityType::DoctorVisit.date_field(), "visit_date");
        assert_eq!(EntityType::Medication.date_field(), "entry_date");
    }
}
