//! Core data model and evaluation logic for the patient vitals dashboard.

use serde::{Deserialize, Serialize};

/// A single vital-sign measurement with the server-supplied level label.
///
/// `levels` is opaque display text from the payload; local classification
/// always goes through [`classify`] instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalReading {
    pub value: f64,
    pub levels: String,
}

/// Paired systolic/diastolic readings for one diagnosis entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BloodPressureReading {
    pub systolic: VitalReading,
    pub diastolic: VitalReading,
}

/// One historical snapshot of a patient's vitals for a given month/year.
///
/// Entries arrive ordered from the payload (most recent first) and are never
/// re-sorted locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisEntry {
    pub month: String,
    pub year: i32,
    pub blood_pressure: BloodPressureReading,
    pub heart_rate: VitalReading,
    pub respiratory_rate: VitalReading,
    pub temperature: VitalReading,
}

impl DiagnosisEntry {
    /// Display label in the form used by the chart axis, e.g. "March 2024".
    pub fn period_label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// A row of the diagnosis-list table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticItem {
    pub name: String,
    pub description: String,
    pub status: String,
}

/// One patient record as delivered by the roster payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub name: String,
    pub gender: String,
    pub age: u32,
    #[serde(default)]
    pub profile_picture: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub insurance_type: String,
    #[serde(default)]
    pub diagnosis_history: Vec<DiagnosisEntry>,
    #[serde(default)]
    pub diagnostic_list: Vec<DiagnosticItem>,
    #[serde(default)]
    pub lab_results: Vec<String>,
}

/// Clinically "normal" interval or target value for a vital sign.
///
/// Precondition for `Span`: `min <= max`. Supplying them swapped is a caller
/// error, not something the evaluator checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceRange {
    Span { min: f64, max: f64 },
    Target(f64),
}

/// Normal interval for heart rate, in bpm.
pub const HEART_RATE_RANGE: ReferenceRange = ReferenceRange::Span {
    min: 80.0,
    max: 100.0,
};

/// Normal interval for respiratory rate, in breaths per minute.
pub const RESPIRATORY_RATE_RANGE: ReferenceRange = ReferenceRange::Span {
    min: 12.0,
    max: 30.0,
};

/// Target body temperature, in °F.
pub const TEMPERATURE_RANGE: ReferenceRange = ReferenceRange::Target(98.6);

/// Normal interval for systolic pressure, in mmHg.
pub const SYSTOLIC_RANGE: ReferenceRange = ReferenceRange::Span {
    min: 90.0,
    max: 120.0,
};

/// Normal interval for diastolic pressure, in mmHg.
pub const DIASTOLIC_RANGE: ReferenceRange = ReferenceRange::Span {
    min: 60.0,
    max: 80.0,
};

/// Where a reading sits relative to its reference range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Normal,
    AboveRange,
    BelowRange,
}

/// Indicator direction for a classification; `None` means no icon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Up,
    Down,
}

impl Classification {
    /// Directional wording shown next to each vitals card.
    pub fn label(self) -> &'static str {
        match self {
            Classification::Normal => "Normal",
            Classification::AboveRange => "Higher than average",
            Classification::BelowRange => "Lower than average",
        }
    }

    /// Arrow direction for the card, if any. Icon choice itself stays in the
    /// presentation layer.
    pub fn indicator(self) -> Option<Indicator> {
        match self {
            Classification::Normal => None,
            Classification::AboveRange => Some(Indicator::Up),
            Classification::BelowRange => Some(Indicator::Down),
        }
    }
}

/// Classify a vital-sign value against its reference range.
///
/// `Span` bounds are inclusive: a value equal to `min` or `max` is `Normal`.
/// A scalar target is `Normal` only on exact equality. Total over all finite
/// inputs.
pub fn classify(value: f64, range: ReferenceRange) -> Classification {
    match range {
        ReferenceRange::Span { min, max } => {
            if value > max {
                Classification::AboveRange
            } else if value < min {
                Classification::BelowRange
            } else {
                Classification::Normal
            }
        }
        ReferenceRange::Target(target) => {
            if value > target {
                Classification::AboveRange
            } else if value < target {
                Classification::BelowRange
            } else {
                Classification::Normal
            }
        }
    }
}

/// Signalled when a patient has no diagnosis history to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no diagnosis history available")]
pub struct NoHistoryAvailable;

/// Pick the focused entry from a diagnosis history.
///
/// An absent or out-of-bounds index falls back to the first entry, which the
/// payload orders as the most recent. The sequence ordering is caller-supplied
/// and not validated here.
pub fn select_entry(
    entries: &[DiagnosisEntry],
    requested: Option<usize>,
) -> Result<&DiagnosisEntry, NoHistoryAvailable> {
    let first = entries.first().ok_or(NoHistoryAvailable)?;
    Ok(match requested {
        Some(index) => entries.get(index).unwrap_or(first),
        None => first,
    })
}

/// A reading paired with its locally derived classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EvaluatedVital {
    pub value: f64,
    pub classification: Classification,
}

impl EvaluatedVital {
    fn new(reading: &VitalReading, range: ReferenceRange) -> Self {
        Self {
            value: reading.value,
            classification: classify(reading.value, range),
        }
    }
}

/// Display-ready summary of the five tracked vitals for one entry.
///
/// The single source of truth for normal/abnormal wording; consumers must not
/// re-derive classifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalsSummary {
    pub period: String,
    pub systolic: EvaluatedVital,
    pub diastolic: EvaluatedVital,
    pub heart_rate: EvaluatedVital,
    pub respiratory_rate: EvaluatedVital,
    pub temperature: EvaluatedVital,
}

/// Evaluate the five tracked vitals of an entry against their fixed ranges.
pub fn build_summary(entry: &DiagnosisEntry) -> VitalsSummary {
    VitalsSummary {
        period: entry.period_label(),
        systolic: EvaluatedVital::new(&entry.blood_pressure.systolic, SYSTOLIC_RANGE),
        diastolic: EvaluatedVital::new(&entry.blood_pressure.diastolic, DIASTOLIC_RANGE),
        heart_rate: EvaluatedVital::new(&entry.heart_rate, HEART_RATE_RANGE),
        respiratory_rate: EvaluatedVital::new(&entry.respiratory_rate, RESPIRATORY_RATE_RANGE),
        temperature: EvaluatedVital::new(&entry.temperature, TEMPERATURE_RANGE),
    }
}

/// Case-insensitive substring filter over the roster by patient name.
///
/// Preserves the input order; an empty term keeps every patient; no match
/// yields an empty list that the caller renders as "no patients found".
pub fn filter_roster<'a>(patients: &'a [Patient], term: &str) -> Vec<&'a Patient> {
    let needle = term.to_lowercase();
    patients
        .iter()
        .filter(|patient| patient.name.to_lowercase().contains(&needle))
        .collect()
}
