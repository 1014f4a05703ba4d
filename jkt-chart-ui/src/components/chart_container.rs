//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Accessible description of the chart
    pub label: String,
    /// Show a placeholder until D3 draws
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 360)]
    pub min_height: u32,
}

/// A div D3.js renders an SVG chart into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; margin: 0 0 16px 0;",
        props.min_height
    );

    rsx! {
        figure {
            style: "{style}",
            aria_label: "{props.label}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Drawing chart..."
                }
            }
            div {
                id: "{props.id}",
                role: "img",
                style: "width: 100%;",
            }
        }
    }
}
