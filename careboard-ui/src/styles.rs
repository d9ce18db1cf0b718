#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-careboard-ui]";

/// Default CSS for the dashboard along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --careboard-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --careboard-bg: #f6f7f8;
  --careboard-card-bg: #ffffff;
  --careboard-card-border: rgba(148, 163, 184, 0.28);
  --careboard-radius: 16px;
  --careboard-text: #1f2933;
  --careboard-muted: #52606d;
  --careboard-heading: #11181c;
  --careboard-accent: #01f0d0;
  --careboard-chart-bg: #f4f0fe;
  --careboard-systolic: #e66fd2;
  --careboard-diastolic: #8c6fe6;
  --careboard-arrow-up: #dc2626;
  --careboard-arrow-down: #2563eb;
  --careboard-banner-bg: #b42318;
  --careboard-banner-text: #ffffff;
}

.careboard-root {
  font-family: var(--careboard-font-family);
  background: var(--careboard-bg);
  color: var(--careboard-text);
  min-height: 100vh;
  padding: 18px;
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.careboard-topbar {
  background: var(--careboard-card-bg);
  border-radius: 999px;
  padding: 12px 28px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  box-shadow: 0 12px 28px rgba(15, 23, 42, 0.06);
}

.topbar-brand {
  font-weight: 700;
  font-size: 1.15rem;
  color: var(--careboard-heading);
}

.topbar-nav {
  list-style: none;
  margin: 0;
  padding: 0;
  display: flex;
  gap: 10px;
}

.topbar-nav li {
  padding: 8px 18px;
  border-radius: 999px;
  font-weight: 600;
  font-size: 0.9rem;
  cursor: pointer;
}

.topbar-nav li:hover {
  background: var(--careboard-accent);
}

.careboard-banner {
  background: var(--careboard-banner-bg);
  color: var(--careboard-banner-text);
  border-radius: calc(var(--careboard-radius) - 6px);
  padding: 14px 18px;
  text-align: center;
  font-weight: 600;
}

.careboard-body {
  display: grid;
  gap: 18px;
  grid-template-columns: minmax(280px, 0.85fr) minmax(460px, 2fr);
  align-items: start;
}

.roster-panel {
  background: var(--careboard-card-bg);
  border: 1px solid var(--careboard-card-border);
  border-radius: var(--careboard-radius);
  padding: 18px;
  display: flex;
  flex-direction: column;
  gap: 14px;
  position: sticky;
  top: 18px;
}

.roster-header {
  display: flex;
  flex-direction: column;
  gap: 10px;
}

.roster-header h2 {
  margin: 0;
  font-size: 1.25rem;
  color: var(--careboard-heading);
}

.roster-header input {
  border: 1px solid rgba(148, 163, 184, 0.5);
  border-radius: 10px;
  padding: 8px 12px;
  font-size: 0.9rem;
}

.roster-header input:focus-visible {
  outline: 2px solid rgba(1, 240, 208, 0.4);
  border-color: var(--careboard-accent);
}

.roster-list {
  list-style: none;
  margin: 0;
  padding: 0;
  display: flex;
  flex-direction: column;
  gap: 8px;
  max-height: 70vh;
  overflow-y: auto;
}

.roster-item {
  display: flex;
  flex-direction: column;
  gap: 2px;
  padding: 10px 12px;
  border-radius: 12px;
  border: 1px solid var(--careboard-card-border);
  cursor: pointer;
  transition: background 120ms ease;
}

.roster-item:hover {
  background: rgba(1, 240, 208, 0.18);
}

.roster-name {
  font-weight: 600;
  color: var(--careboard-heading);
}

.roster-meta {
  font-size: 0.84rem;
  color: var(--careboard-muted);
}

.roster-empty,
.panel-empty,
.history-empty {
  color: var(--careboard-muted);
  font-style: italic;
  font-size: 0.92rem;
}

.careboard-main {
  display: flex;
  flex-direction: column;
  gap: 18px;
}

.careboard-prompt {
  background: var(--careboard-card-bg);
  border: 1px dashed rgba(148, 163, 184, 0.5);
  border-radius: var(--careboard-radius);
  padding: 36px;
  text-align: center;
  color: var(--careboard-muted);
  font-style: italic;
}

.history-panel,
.profile-panel,
.diagnosis-panel,
.labs-panel {
  background: var(--careboard-card-bg);
  border: 1px solid var(--careboard-card-border);
  border-radius: var(--careboard-radius);
  padding: 20px;
  display: flex;
  flex-direction: column;
  gap: 14px;
}

.history-panel h2,
.profile-panel h2,
.diagnosis-panel h2,
.labs-panel h2 {
  margin: 0;
  font-size: 1.15rem;
  color: var(--careboard-heading);
}

.history-period {
  margin: 0;
  font-size: 0.88rem;
  color: var(--careboard-muted);
}

.bp-chart {
  background: var(--careboard-chart-bg);
  border-radius: calc(var(--careboard-radius) - 6px);
  padding: 14px;
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.bp-legend {
  display: flex;
  gap: 14px;
  font-size: 0.82rem;
  font-weight: 600;
}

.bp-legend-item::before {
  content: "";
  display: inline-block;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  margin-right: 6px;
}

.bp-legend-item[data-series="systolic"]::before {
  background: var(--careboard-systolic);
}

.bp-legend-item[data-series="diastolic"]::before {
  background: var(--careboard-diastolic);
}

.bp-chart-plot {
  width: 100%;
  height: 160px;
}

.bp-chart-plot polyline {
  fill: none;
  stroke-width: 2.2;
  stroke-linejoin: round;
  stroke-linecap: round;
}

.bp-chart-plot g[data-series="systolic"] polyline {
  stroke: var(--careboard-systolic);
}

.bp-chart-plot g[data-series="diastolic"] polyline {
  stroke: var(--careboard-diastolic);
}

.bp-chart-plot circle {
  cursor: pointer;
}

.bp-chart-plot g[data-series="systolic"] circle {
  fill: var(--careboard-systolic);
}

.bp-chart-plot g[data-series="diastolic"] circle {
  fill: var(--careboard-diastolic);
}

.bp-axis {
  display: flex;
  justify-content: space-between;
  font-size: 0.78rem;
  color: var(--careboard-muted);
  font-variant-numeric: tabular-nums;
}

.vitals-grid {
  display: grid;
  gap: 14px;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
}

.vital-card {
  border: 1px solid var(--careboard-card-border);
  border-radius: 12px;
  padding: 14px;
  display: flex;
  flex-direction: column;
  gap: 6px;
  background: rgba(248, 250, 252, 0.8);
}

.vital-card h3 {
  margin: 0;
  font-size: 0.92rem;
  color: var(--careboard-muted);
}

.vital-value {
  margin: 0;
  font-size: 1.3rem;
  font-weight: 700;
  color: var(--careboard-heading);
  font-variant-numeric: tabular-nums;
}

.vital-level {
  display: flex;
  align-items: center;
  gap: 6px;
  font-size: 0.84rem;
  color: var(--careboard-muted);
}

.vital-arrow[data-direction="up"] {
  color: var(--careboard-arrow-up);
}

.vital-arrow[data-direction="down"] {
  color: var(--careboard-arrow-down);
}

.profile-rows {
  margin: 0;
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.profile-row {
  display: flex;
  gap: 14px;
  align-items: baseline;
}

.profile-row dt {
  flex: 0 0 160px;
  font-weight: 600;
  color: var(--careboard-heading);
  font-size: 0.9rem;
}

.profile-row dd {
  margin: 0;
  color: var(--careboard-muted);
  font-size: 0.9rem;
}

.diagnosis-table {
  width: 100%;
  border-collapse: collapse;
  font-size: 0.9rem;
}

.diagnosis-table th {
  text-align: left;
  background: rgba(148, 163, 184, 0.14);
  padding: 10px 12px;
  border-radius: 6px;
  color: var(--careboard-heading);
}

.diagnosis-table td {
  padding: 10px 12px;
  border-bottom: 1px solid rgba(148, 163, 184, 0.24);
  color: var(--careboard-muted);
}

.diagnosis-status {
  font-style: italic;
}

.labs-list {
  list-style: none;
  margin: 0;
  padding: 0;
  display: flex;
  flex-direction: column;
  gap: 8px;
}

.labs-list li {
  background: rgba(148, 163, 184, 0.12);
  border-radius: 8px;
  padding: 10px 12px;
  font-size: 0.9rem;
}

@media (max-width: 960px) {
  .careboard-body {
    grid-template-columns: 1fr;
  }

  .roster-panel {
    position: static;
  }

  .profile-row dt {
    flex-basis: 120px;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-careboard-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
