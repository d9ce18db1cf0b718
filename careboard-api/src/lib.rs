//! Endpoint JSON to typed `DashboardPayload` converter.
//!
//! The remote endpoint has historically answered with two shapes: a JSON
//! object carrying optional `patients`, `diagnostic_list` and `lab_results`
//! arrays, or a bare array that is the roster itself. This module is the one
//! place that tolerance lives; everything past it works with typed data.

use careboard_core::{DiagnosticItem, Patient};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything the dashboard reads from one fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardPayload {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub diagnostic_list: Vec<DiagnosticItem>,
    #[serde(default)]
    pub lab_results: Vec<String>,
}

/// Payload-boundary failures, surfaced to the UI the same way as a fetch
/// failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

/// Parse a payload from raw JSON text.
pub fn parse_payload_str(payload_json: &str) -> Result<DashboardPayload, ApiError> {
    let value: Value = serde_json::from_str(payload_json)?;
    parse_payload_value(&value)
}

/// Parse a payload from an already-decoded `serde_json::Value`.
pub fn parse_payload_value(payload: &Value) -> Result<DashboardPayload, ApiError> {
    match payload {
        Value::Object(_) => {
            let parsed: DashboardPayload = serde_json::from_value(payload.clone())
                .map_err(|err| ApiError::UnexpectedShape(err.to_string()))?;
            Ok(parsed)
        }
        // Roster-only answer: the array is the patient list.
        Value::Array(_) => {
            let patients: Vec<Patient> = serde_json::from_value(payload.clone())
                .map_err(|err| ApiError::UnexpectedShape(format!("roster array: {err}")))?;
            Ok(DashboardPayload {
                patients,
                ..DashboardPayload::default()
            })
        }
        other => Err(ApiError::UnexpectedShape(format!(
            "expected object or array at top level, found {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_payload_with_all_fields_parses() {
        let payload = json!({
            "patients": [{
                "name": "Jessica Taylor",
                "gender": "Female",
                "age": 28,
                "diagnosis_history": [],
                "diagnostic_list": [],
                "lab_results": ["Blood Tests"]
            }],
            "diagnostic_list": [{
                "name": "Hypertension",
                "description": "Chronically elevated blood pressure",
                "status": "Under Observation"
            }],
            "lab_results": ["CT Scans"]
        });

        let parsed = parse_payload_value(&payload).unwrap();
        assert_eq!(parsed.patients.len(), 1);
        assert_eq!(parsed.patients[0].name, "Jessica Taylor");
        assert_eq!(parsed.diagnostic_list[0].name, "Hypertension");
        assert_eq!(parsed.lab_results, vec!["CT Scans".to_string()]);
    }

    #[test]
    fn absent_top_level_fields_mean_empty_lists() {
        let parsed = parse_payload_value(&json!({})).unwrap();
        assert!(parsed.patients.is_empty());
        assert!(parsed.diagnostic_list.is_empty());
        assert!(parsed.lab_results.is_empty());
    }

    #[test]
    fn bare_array_is_accepted_as_roster_only() {
        let payload = json!([{
            "name": "Tom Lee",
            "gender": "Male",
            "age": 41
        }]);

        let parsed = parse_payload_value(&payload).unwrap();
        assert_eq!(parsed.patients.len(), 1);
        assert_eq!(parsed.patients[0].name, "Tom Lee");
        assert!(parsed.patients[0].diagnosis_history.is_empty());
        assert!(parsed.diagnostic_list.is_empty());
    }

    #[test]
    fn scalar_top_level_is_an_unexpected_shape() {
        let err = parse_payload_value(&json!(42)).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn malformed_patient_entry_is_an_unexpected_shape() {
        let payload = json!({ "patients": [{ "name": "No Age" }] });
        let err = parse_payload_value(&payload).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));
    }

    #[test]
    fn invalid_json_text_is_a_json_error() {
        let err = parse_payload_str("{not json").unwrap_err();
        assert!(matches!(err, ApiError::Json(_)));
    }
}
