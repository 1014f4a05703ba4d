//! Jakarta AQI Dashboard (2024)
//!
//! A bar chart of one day's metrics, an AQI trend line over every day and a
//! health information panel, all driven by one date slider.
//!
//! Data flow:
//! 1. `build.rs` checks `fixtures/jakarta_aqi.csv` and copies it into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV into a `Dataset` and bind it to a `ViewBinder`
//!    whose subscriber hands both chart specs to D3.js.
//! 4. On slider change: `ViewBinder::select` re-derives every artifact, the
//!    subscriber redraws the charts and the info panel re-renders.

use dioxus::prelude::*;
use jkt_aqi::Dataset;
use jkt_chart_ui::components::{
    AqiInfoPanel, ChartContainer, ChartHeader, DateSlider, ErrorDisplay, LoadingSpinner,
};
use jkt_chart_ui::js_bridge;
use jkt_chart_ui::state::AppState;
use jkt_view::ViewBinder;

const JAKARTA_AQI_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/jakarta_aqi.csv"));

const DASHBOARD_TITLE: &str = "Jakarta AQI Dashboard (2024)";

/// DOM ids for the D3 chart container divs.
const BAR_CHART_ID: &str = "daily-aqi-chart";
const LINE_CHART_ID: &str = "line-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("jakarta-aqi-root"))
        .launch(App);
}

/// Parse the embedded dataset and wire the chart renderers to the binder.
fn new_binder() -> jkt_aqi::Result<ViewBinder> {
    let dataset = Dataset::parse_csv(JAKARTA_AQI_CSV)?;
    log::info!("loaded {} days of AQI data", dataset.len());

    let mut binder = ViewBinder::new(dataset);
    binder.subscribe(|view| {
        js_bridge::render_bar_chart(BAR_CHART_ID, &view.bar_chart.to_json());
        js_bridge::render_line_chart(LINE_CHART_ID, &view.line_chart.to_json());
    });
    Ok(binder)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut binder: Signal<Option<ViewBinder>> = use_signal(|| None);

    // ─── Effect 1: Parse the dataset once on mount ───
    use_effect(move || {
        js_bridge::set_document_title(DASHBOARD_TITLE);
        match new_binder() {
            Ok(b) => {
                state.slider_marks.set(b.slider_marks());
                binder.set(Some(b));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Failed to load AQI dataset: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load air quality data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Re-derive everything when the selection changes ───
    // Re-runs whenever loading or selected_index change.
    use_effect(move || {
        let index = (state.selected_index)();
        if (state.loading)() {
            return;
        }

        // `write()` does not subscribe this effect to `binder`.
        let view = match binder.write().as_mut() {
            Some(b) => b.select(index).clone(),
            None => return,
        };
        state.view.set(Some(view));
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: DASHBOARD_TITLE.to_string(),
                subtitle: "Move the slider to pick a day".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartContainer {
                    id: BAR_CHART_ID.to_string(),
                    label: "AQI, temperature and wind speed for the selected day".to_string(),
                    loading: (state.view)().is_none(),
                    min_height: 360,
                }

                ChartContainer {
                    id: LINE_CHART_ID.to_string(),
                    label: "Daily AQI trend across all days".to_string(),
                    loading: (state.view)().is_none(),
                    min_height: 400,
                }

                if let Some(view) = (state.view)() {
                    AqiInfoPanel { info: view.info }
                }

                DateSlider {}
            }
        }
    }
}
