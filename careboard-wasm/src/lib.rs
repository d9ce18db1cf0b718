//! Framework-neutral WASM <-> JavaScript bridge.

use careboard_core::{build_summary, select_entry};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Validate a raw payload and hand back the typed dashboard data.
#[wasm_bindgen]
pub fn parse_payload(payload: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let value = from_value::<serde_json::Value>(payload)
        .map_err(|err| JsValue::from_str(&format!("payload is not JSON: {err}")))?;

    let parsed = careboard_api::parse_payload_value(&value)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    to_value(&parsed).map_err(|err| JsValue::from_str(&format!("serialize failed: {err}")))
}

/// Build the vitals summary for one patient's selected history entry.
///
/// `entry_index` may be omitted to take the most recent entry; an empty
/// history is reported as an error string for the host page's empty state.
#[wasm_bindgen]
pub fn summarize_entry(
    payload: JsValue,
    patient_index: usize,
    entry_index: Option<usize>,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let value = from_value::<serde_json::Value>(payload)
        .map_err(|err| JsValue::from_str(&format!("payload is not JSON: {err}")))?;

    let parsed = careboard_api::parse_payload_value(&value)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let patient = parsed
        .patients
        .get(patient_index)
        .ok_or_else(|| JsValue::from_str("no patient at the given index"))?;

    let entry = select_entry(&patient.diagnosis_history, entry_index)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let summary = build_summary(entry);
    to_value(&summary).map_err(|err| JsValue::from_str(&format!("serialize failed: {err}")))
}
