//! Date slider: the only writer of `AppState::selected_index`.

use crate::state::AppState;
use dioxus::prelude::*;

/// Range slider over the dataset's days, one step per record.
///
/// The input's `max` is the last record index, so the browser never produces
/// an out-of-range selection. Clicking a date mark selects that day too.
#[component]
pub fn DateSlider() -> Element {
    let mut state = use_context::<AppState>();
    let max = state.max_index();
    let selected = (state.selected_index)();
    let marks: Vec<(usize, String, &str)> = state
        .slider_marks
        .read()
        .iter()
        .map(|(index, label)| {
            let style = if *index == selected {
                "cursor: pointer; font-weight: bold;"
            } else {
                "cursor: pointer;"
            };
            (*index, label.clone(), style)
        })
        .collect();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(index) = evt.value().parse::<usize>() {
            if index <= state.max_index() {
                state.selected_index.set(index);
            }
        }
    };

    rsx! {
        div {
            style: "margin: 16px 0;",
            input {
                id: "date-slider",
                r#type: "range",
                min: "0",
                max: "{max}",
                step: "1",
                value: "{selected}",
                style: "width: 100%;",
                oninput: on_input,
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #555;",
                for (index, label, style) in marks.into_iter() {
                    span {
                        key: "{index}",
                        style: "{style}",
                        onclick: move |_| state.selected_index.set(index),
                        "{label}"
                    }
                }
            }
        }
    }
}
