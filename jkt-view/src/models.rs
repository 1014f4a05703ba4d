//! Render artifacts derived from the selected record.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend. Keys are camelCase to match the chart
//! scripts' config objects.

use jkt_aqi::{Classification, Record};
use serde::Serialize;

/// Title of the trend chart.
pub const LINE_CHART_TITLE: &str = "Daily AQI Trends in Jakarta (2024)";

/// Bar categories, in the order their values appear.
pub const BAR_CATEGORIES: [&str; 3] = ["AQI", "Temperature", "Wind Speed"];

/// A single (date, value) pair used for line chart data points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateValue {
    /// "YYYY-MM-DD"
    pub date: String,
    pub value: f64,
}

/// Bar chart of the selected day's metrics, drawn in one color.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSpec {
    pub title: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    /// Lowercased CSS color of the selected day's category.
    pub color: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
}

/// AQI trend across every record.
///
/// The whole line takes the color of the *selected* day's category; points
/// are not colored individually.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineChartSpec {
    pub title: String,
    pub points: Vec<DateValue>,
    pub color: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub markers: bool,
}

/// Text summary for the selected day.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InfoPanel {
    pub date: String,
    pub aqi: i32,
    pub category: String,
    pub advisory: String,
    pub temperature: f64,
    pub wind_speed: f64,
    /// CSS color for the AQI heading.
    pub color: String,
}

impl InfoPanel {
    pub fn date_line(&self) -> String {
        format!("Date: {}", self.date)
    }

    pub fn aqi_line(&self) -> String {
        format!("AQI: {} ({})", self.aqi, self.category)
    }

    pub fn advisory_line(&self) -> String {
        format!("Health Implications: {}", self.advisory)
    }

    pub fn temperature_line(&self) -> String {
        format!("Temperature: {}°C", self.temperature)
    }

    pub fn wind_speed_line(&self) -> String {
        format!("Wind Speed: {} m/s", self.wind_speed)
    }

    /// All panel lines in display order.
    pub fn lines(&self) -> [String; 5] {
        [
            self.date_line(),
            self.aqi_line(),
            self.advisory_line(),
            self.temperature_line(),
            self.wind_speed_line(),
        ]
    }
}

/// Everything the dashboard shows for one selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub index: usize,
    pub record: Record,
    pub classification: Classification,
    pub bar_chart: BarChartSpec,
    pub line_chart: LineChartSpec,
    pub info: InfoPanel,
}

impl BarChartSpec {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl LineChartSpec {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
