//! Page header with the dashboard title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Page title
    pub title: String,
    /// Optional subtitle shown under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered dashboard title with an optional subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 12px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
