//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use jkt_view::DashboardView;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Index of the selected day. Written only by the date slider.
    pub selected_index: Signal<usize>,
    /// `(index, "YYYY-MM-DD")` slider marks, one per record
    pub slider_marks: Signal<Vec<(usize, String)>>,
    /// View derived for the current selection (None until loaded)
    pub view: Signal<Option<DashboardView>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_index: Signal::new(0),
            slider_marks: Signal::new(Vec::new()),
            view: Signal::new(None),
        }
    }

    /// Highest valid slider position, 0 when no marks are loaded.
    pub fn max_index(&self) -> usize {
        self.slider_marks.read().len().saturating_sub(1)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
