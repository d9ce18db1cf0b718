//! Dashboard view components for the WebAssembly build.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::styles;
    use careboard_api::DashboardPayload;
    use careboard_core::{
        build_summary, filter_roster, select_entry, DiagnosisEntry, DiagnosticItem, EvaluatedVital,
        Indicator, Patient,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, HtmlInputElement, Window};
    use yew::events::InputEvent;
    use yew::prelude::*;
    use yew::TargetCast;

    #[derive(Properties, PartialEq)]
    pub struct DashboardViewProps {
        pub payload: DashboardPayload,
        /// Fetch/payload failure text from the host page, shown as a banner.
        #[prop_or_default]
        pub error: Option<String>,
    }

    #[function_component(DashboardView)]
    fn dashboard_view(props: &DashboardViewProps) -> Html {
        let payload = &props.payload;

        use_effect_with((), |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Err(err) = styles::ensure_styles(&document) {
                        console::error_1(&err);
                    }
                }
            }
            || ()
        });

        let search = use_state(String::new);
        let selected_patient = use_state(|| Option::<Patient>::None);
        // Index into the active patient's diagnosis history; None means the
        // most recent entry. Reset whenever the active patient changes.
        let selected_entry = use_state(|| Option::<usize>::None);

        let on_search = {
            let search = search.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                search.set(input.value());
            })
        };

        let on_select_patient = {
            let selected_patient = selected_patient.clone();
            let selected_entry = selected_entry.clone();
            Callback::from(move |patient: Patient| {
                selected_entry.set(None);
                selected_patient.set(Some(patient));
            })
        };

        let on_select_entry = {
            let selected_entry = selected_entry.clone();
            Callback::from(move |index: usize| {
                selected_entry.set(Some(index));
            })
        };

        html! {
            <div class="careboard-root">
                { render_topbar() }
                { props.error.as_ref().map(render_error_banner).unwrap_or_default() }
                <div class="careboard-body">
                    { render_roster(&payload.patients, &search, on_search, on_select_patient) }
                    <main class="careboard-main">
                        {
                            match selected_patient.as_ref() {
                                Some(patient) => html! {
                                    <>
                                        { render_history_panel(patient, *selected_entry, on_select_entry) }
                                        { render_profile(patient) }
                                        { render_diagnostic_list(&patient.diagnostic_list) }
                                        { render_lab_results(&patient.lab_results) }
                                    </>
                                },
                                None => html! {
                                    <section class="careboard-prompt">
                                        {"Select a patient to see their vitals and history."}
                                    </section>
                                },
                            }
                        }
                    </main>
                </div>
            </div>
        }
    }

    fn render_topbar() -> Html {
        let items = ["Overview", "Patients", "Schedule", "Messages", "Transactions"];
        html! {
            <header class="careboard-topbar">
                <span class="topbar-brand">{"Tech.Care"}</span>
                <nav aria-label="Main navigation">
                    <ul class="topbar-nav">
                        { for items.into_iter().map(|name| html! { <li>{ name }</li> }) }
                    </ul>
                </nav>
            </header>
        }
    }

    fn render_error_banner(message: &String) -> Html {
        html! { <div class="careboard-banner" role="alert">{ message.clone() }</div> }
    }

    fn render_roster(
        patients: &[Patient],
        search: &UseStateHandle<String>,
        on_search: Callback<InputEvent>,
        on_select: Callback<Patient>,
    ) -> Html {
        let filtered = filter_roster(patients, search.as_str());

        html! {
            <aside class="roster-panel">
                <header class="roster-header">
                    <h2>{"Patients"}</h2>
                    <input
                        type="search"
                        placeholder="Search..."
                        value={(**search).clone()}
                        oninput={on_search}
                        aria-label="Search patients by name"
                    />
                </header>
                <ul class="roster-list">
                    {
                        if filtered.is_empty() {
                            html! { <li class="roster-empty">{"No patients found"}</li> }
                        } else {
                            html! { for filtered.into_iter().map(|patient| {
                                let on_select = on_select.clone();
                                let selected = patient.clone();
                                let onclick = Callback::from(move |_| on_select.emit(selected.clone()));
                                html! {
                                    <li class="roster-item" onclick={onclick}>
                                        <span class="roster-name">{ patient.name.clone() }</span>
                                        <span class="roster-meta">
                                            { format!("{}, {} years", patient.gender, patient.age) }
                                        </span>
                                    </li>
                                }
                            }) }
                        }
                    }
                </ul>
            </aside>
        }
    }

    fn render_history_panel(
        patient: &Patient,
        selected_entry: Option<usize>,
        on_select_entry: Callback<usize>,
    ) -> Html {
        let entry = match select_entry(&patient.diagnosis_history, selected_entry) {
            Ok(entry) => entry,
            Err(_) => {
                return html! {
                    <section class="history-panel">
                        <h2>{ format!("Diagnosis History for {}", patient.name) }</h2>
                        <p class="history-empty">{"No diagnosis history available"}</p>
                    </section>
                }
            }
        };

        let summary = build_summary(entry);

        html! {
            <section class="history-panel">
                <h2>{ format!("Diagnosis History for {}", patient.name) }</h2>
                { render_bp_chart(&patient.diagnosis_history, on_select_entry) }
                <p class="history-period">{ format!("Showing {}", summary.period) }</p>
                <div class="vitals-grid">
                    { render_vital_card("Systolic Pressure", "mmHg", &summary.systolic) }
                    { render_vital_card("Diastolic Pressure", "mmHg", &summary.diastolic) }
                    { render_vital_card("Respiratory Rate", "BPM", &summary.respiratory_rate) }
                    { render_vital_card("Temperature", "°F", &summary.temperature) }
                    { render_vital_card("Heart Rate", "BPM", &summary.heart_rate) }
                </div>
            </section>
        }
    }

    fn render_vital_card(title: &str, unit: &str, vital: &EvaluatedVital) -> Html {
        let indicator = vital.classification.indicator().map(|direction| {
            let (glyph, level) = match direction {
                Indicator::Up => ("\u{25b2}", "up"),
                Indicator::Down => ("\u{25bc}", "down"),
            };
            html! { <span class="vital-arrow" data-direction={level}>{ glyph }</span> }
        });

        html! {
            <div class="vital-card">
                <h3>{ title }</h3>
                <p class="vital-value">{ format!("{} {unit}", format_value(vital.value)) }</p>
                <div class="vital-level">
                    { indicator.unwrap_or_default() }
                    <span>{ vital.classification.label() }</span>
                </div>
            </div>
        }
    }

    const CHART_WIDTH: f64 = 320.0;
    const CHART_HEIGHT: f64 = 120.0;
    const CHART_PAD: f64 = 12.0;

    fn render_bp_chart(history: &[DiagnosisEntry], on_select: Callback<usize>) -> Html {
        let systolic: Vec<f64> = history
            .iter()
            .map(|entry| entry.blood_pressure.systolic.value)
            .collect();
        let diastolic: Vec<f64> = history
            .iter()
            .map(|entry| entry.blood_pressure.diastolic.value)
            .collect();

        let all: Vec<f64> = systolic.iter().chain(diastolic.iter()).copied().collect();
        let min = all.iter().copied().fold(f64::INFINITY, f64::min);
        let max = all.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let first_label = history.first().map(DiagnosisEntry::period_label);
        let last_label = history.last().map(DiagnosisEntry::period_label);

        html! {
            <div class="bp-chart">
                <div class="bp-legend">
                    <span class="bp-legend-item" data-series="systolic">{"Systolic"}</span>
                    <span class="bp-legend-item" data-series="diastolic">{"Diastolic"}</span>
                </div>
                <svg
                    class="bp-chart-plot"
                    viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")}
                    preserveAspectRatio="none"
                    role="img"
                    aria-label="Blood pressure history"
                >
                    { render_series(&systolic, min, max, "systolic", &on_select) }
                    { render_series(&diastolic, min, max, "diastolic", &on_select) }
                </svg>
                <div class="bp-axis">
                    <span>{ first_label.unwrap_or_default() }</span>
                    <span>{ last_label.unwrap_or_default() }</span>
                </div>
            </div>
        }
    }

    fn render_series(
        values: &[f64],
        min: f64,
        max: f64,
        series: &'static str,
        on_select: &Callback<usize>,
    ) -> Html {
        let coords: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(index, value)| (plot_x(index, values.len()), plot_y(*value, min, max)))
            .collect();

        let points = coords
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ");

        html! {
            <g data-series={series}>
                <polyline points={points} />
                { for coords.into_iter().enumerate().map(|(index, (x, y))| {
                    let on_select = on_select.clone();
                    let onclick = Callback::from(move |_| on_select.emit(index));
                    html! {
                        <circle
                            cx={format!("{x:.1}")}
                            cy={format!("{y:.1}")}
                            r="4"
                            onclick={onclick}
                        />
                    }
                }) }
            </g>
        }
    }

    fn plot_x(index: usize, count: usize) -> f64 {
        if count <= 1 {
            return CHART_WIDTH / 2.0;
        }
        let step = (CHART_WIDTH - 2.0 * CHART_PAD) / (count as f64 - 1.0);
        CHART_PAD + index as f64 * step
    }

    fn plot_y(value: f64, min: f64, max: f64) -> f64 {
        if (max - min).abs() < f64::EPSILON {
            return CHART_HEIGHT / 2.0;
        }
        let scaled = (value - min) / (max - min);
        CHART_HEIGHT - CHART_PAD - scaled * (CHART_HEIGHT - 2.0 * CHART_PAD)
    }

    fn render_profile(patient: &Patient) -> Html {
        let rows = [
            ("Date of Birth", &patient.date_of_birth),
            ("Gender", &patient.gender),
            ("Contact Info", &patient.phone_number),
            ("Emergency Contact", &patient.emergency_contact),
            ("Insurance Provider", &patient.insurance_type),
        ];

        html! {
            <section class="profile-panel">
                <h2>{ patient.name.clone() }</h2>
                <dl class="profile-rows">
                    { for rows.into_iter().map(|(label, value)| html! {
                        <div class="profile-row">
                            <dt>{ label }</dt>
                            <dd>{ if value.is_empty() { "N/A".to_string() } else { value.clone() } }</dd>
                        </div>
                    }) }
                </dl>
            </section>
        }
    }

    fn render_diagnostic_list(items: &[DiagnosticItem]) -> Html {
        html! {
            <section class="diagnosis-panel">
                <h2>{"Diagnosis List"}</h2>
                {
                    if items.is_empty() {
                        html! { <p class="panel-empty">{"No diagnoses available for the selected patient."}</p> }
                    } else {
                        html! {
                            <table class="diagnosis-table">
                                <thead>
                                    <tr>
                                        <th>{"Problem/Diagnosis"}</th>
                                        <th>{"Description"}</th>
                                        <th>{"Status"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for items.iter().map(|item| html! {
                                        <tr>
                                            <td>{ item.name.clone() }</td>
                                            <td>{ item.description.clone() }</td>
                                            <td class="diagnosis-status">{ item.status.clone() }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        }
                    }
                }
            </section>
        }
    }

    fn render_lab_results(results: &[String]) -> Html {
        html! {
            <section class="labs-panel">
                <h2>{"Lab Results"}</h2>
                {
                    if results.is_empty() {
                        html! { <p class="panel-empty">{"No lab results available for the selected patient."}</p> }
                    } else {
                        html! {
                            <ul class="labs-list">
                                { for results.iter().map(|result| html! {
                                    <li>{ result.clone() }</li>
                                }) }
                            </ul>
                        }
                    }
                }
            </section>
        }
    }

    fn format_value(value: f64) -> String {
        if value.fract().abs() < f64::EPSILON {
            format!("{value:.0}")
        } else {
            format!("{value}")
        }
    }

    #[wasm_bindgen]
    pub fn mount_dashboard_view(
        selector: &str,
        payload: JsValue,
        error: Option<String>,
    ) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("selector error: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("no element matches selector"))?;

        let payload: DashboardPayload = from_value(payload)?;

        yew::Renderer::<DashboardView>::with_root_and_props(
            target,
            DashboardViewProps { payload, error },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_dashboard_view;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_dashboard_view(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: Option<String>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "careboard-ui only supports the wasm32 target",
    ))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::mount_dashboard_view;

    #[test]
    fn mount_accepts_host_error_text() {
        // The host page reports fetch failures through the third argument;
        // coercing to a fn pointer pins that part of the public signature.
        let _mount: fn(
            &str,
            wasm_bindgen::JsValue,
            Option<String>,
        ) -> Result<(), wasm_bindgen::JsValue> = mount_dashboard_view;
    }
}
