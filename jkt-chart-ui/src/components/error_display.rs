//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Replaces the charts when the dataset could not be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Dashboard unavailable: " }
            "{props.message}"
            p {
                style: "margin: 6px 0 0 0; font-size: 12px; color: #8E2424;",
                "Check fixtures/jakarta_aqi.csv and rebuild."
            }
        }
    }
}
