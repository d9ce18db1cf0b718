use std::fs;

use careboard_api::parse_payload_str;
use careboard_core::{build_summary, select_entry, Classification, NoHistoryAvailable};
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn fixture_summary_matches_golden() {
    let payload_json =
        fs::read_to_string(fixture_path("dashboard_payload.json")).expect("missing fixture");
    let payload = parse_payload_str(&payload_json).expect("fixture should parse");

    let jessica = &payload.patients[0];
    let entry = select_entry(&jessica.diagnosis_history, None).expect("history is non-empty");
    let summary = build_summary(entry);

    let actual = serde_json::to_value(summary).expect("summary serializes");
    let golden = fs::read_to_string(fixture_path("jessica_march_summary.json"))
        .expect("missing golden summary");
    let expected: Value = serde_json::from_str(&golden).expect("golden is valid JSON");

    assert_eq!(actual, expected);
}

#[test]
fn chart_selection_drives_the_summary() {
    let payload_json =
        fs::read_to_string(fixture_path("dashboard_payload.json")).expect("missing fixture");
    let payload = parse_payload_str(&payload_json).expect("fixture should parse");

    let jessica = &payload.patients[0];
    let entry = select_entry(&jessica.diagnosis_history, Some(1)).expect("history is non-empty");
    let summary = build_summary(entry);

    assert_eq!(summary.period, "February 2024");
    assert_eq!(summary.heart_rate.classification, Classification::AboveRange);
    assert_eq!(summary.temperature.classification, Classification::Normal);
}

#[test]
fn patient_without_history_signals_the_empty_state() {
    let payload_json =
        fs::read_to_string(fixture_path("dashboard_payload.json")).expect("missing fixture");
    let payload = parse_payload_str(&payload_json).expect("fixture should parse");

    let tom = &payload.patients[1];
    assert_eq!(
        select_entry(&tom.diagnosis_history, None),
        Err(NoHistoryAvailable)
    );
}
