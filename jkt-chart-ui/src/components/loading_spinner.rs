use dioxus::prelude::*;

/// Placeholder shown until the dataset is parsed.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading air quality data..."
        }
    }
}
