//! Enumerated record fields.
//!
//! Values are stored and exported in their lower-case canonical spelling.
//! Parsing is exact: `"Active"` is not `"active"`, so a misspelt status in a
//! source file surfaces as a validation error instead of being rewritten.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meal a weight/diet entry was logged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
    #[default]
    Other,
}

impl Meal {
    pub const VALUES: &'static [&'static str] = &["breakfast", "lunch", "dinner", "other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
            Meal::Other => "other",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Meal::Breakfast),
            "lunch" => Ok(Meal::Lunch),
            "dinner" => Ok(Meal::Dinner),
            "other" => Ok(Meal::Other),
            _ => Err(format!("Unknown meal: {s}")),
        }
    }
}

/// Medication course status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicationStatus {
    Active,
    Paused,
    Stopped,
}

impl MedicationStatus {
    pub const VALUES: &'static [&'static str] = &["active", "paused", "stopped"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationStatus::Active => "active",
            MedicationStatus::Paused => "paused",
            MedicationStatus::Stopped => "stopped",
        }
    }
}

impl fmt::Display for MedicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MedicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MedicationStatus::Active),
            "paused" => Ok(MedicationStatus::Paused),
            "stopped" => Ok(MedicationStatus::Stopped),
            _ => Err(format!("Unknown medication status: {s}")),
        }
    }
}

/// Diagnosis status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisStatus {
    Active,
    Resolved,
    Monitoring,
}

impl DiagnosisStatus {
    pub const VALUES: &'static [&'static str] = &["active", "resolved", "monitoring"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisStatus::Active => "active",
            DiagnosisStatus::Resolved => "resolved",
            DiagnosisStatus::Monitoring => "monitoring",
        }
    }
}

impl fmt::Display for DiagnosisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosisStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DiagnosisStatus::Active),
            "resolved" => Ok(DiagnosisStatus::Resolved),
            "monitoring" => Ok(DiagnosisStatus::Monitoring),
            _ => Err(format!("Unknown diagnosis status: {s}")),
        }
    }
}
