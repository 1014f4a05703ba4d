//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes chart specs and calls those globals.

use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Globals promoted to `window.*` once the scripts are evaluated.
const CHART_GLOBALS: [&str; 5] = [
    "renderBarChart",
    "renderLineChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

fn eval(code: &str) -> Result<JsValue, JsValue> {
    js_sys::eval(code)
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('JKT JS call failed:', e); }}",
        code
    );
    if let Err(e) = eval(&wrapped) {
        log::warn!("JS eval failed: {:?}", e);
    }
}

/// Escape a JSON payload for embedding in a single-quoted JS string literal.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Scripts are stashed on `window` and evaluated at global scope via an
/// indirect `eval` once D3 is ready, so their `function` declarations do not
/// end up block-scoped inside the `setInterval` callback.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, LINE_CHART_JS].join("\n");

    let store_js = format!(
        "window.__jktChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    if let Err(e) = eval(&store_js) {
        log::error!("Failed to stage chart scripts: {:?}", e);
        return;
    }

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};\n"))
        .collect();

    call_js(&format!(
        r#"
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__jktChartScripts);
                    delete window.__jktChartScripts;
                    {promote}
                    window.__jktChartsReady = true;
                    console.log('JKT charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Poll until charts are initialized and the container exists, then call
/// `window.<render_fn>(container_id, spec_json)`.
fn render_when_ready(render_fn: &str, container_id: &str, spec_json: &str) {
    let escaped = escape_for_js(spec_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__jktChartsReady &&
                    typeof window.{render_fn} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render_fn}('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[JKT] {render_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the per-day metrics bar chart from a serialized `BarChartSpec`.
pub fn render_bar_chart(container_id: &str, spec_json: &str) {
    render_when_ready("renderBarChart", container_id, spec_json);
}

/// Render the AQI trend line chart from a serialized `LineChartSpec`.
pub fn render_line_chart(container_id: &str, spec_json: &str) {
    render_when_ready("renderLineChart", container_id, spec_json);
}

/// Set the browser tab title.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[cfg(test)]
mod tests {
    use super::escape_for_js;

    #[test]
    fn test_escape_for_js() {
        assert_eq!(escape_for_js(r#"{"a":"it's"}"#), r#"{"a":"it\'s"}"#);
        assert_eq!(escape_for_js("{\n}"), "{}");
        assert_eq!(escape_for_js(r#"{"a":"\"q\""}"#), r#"{"a":"\\"q\\""}"#);
    }
}
