//! Reusable Dioxus RSX components for the Jakarta AQI dashboard.

mod aqi_info_panel;
mod chart_container;
mod chart_header;
mod date_slider;
mod error_display;
mod loading_spinner;

pub use aqi_info_panel::AqiInfoPanel;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_slider::DateSlider;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
