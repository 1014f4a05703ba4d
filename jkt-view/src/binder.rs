//! The selection state cell and the derivations it drives.

use crate::models::{
    BarChartSpec, DashboardView, DateValue, InfoPanel, LineChartSpec, BAR_CATEGORIES,
    LINE_CHART_TITLE,
};
use jkt_aqi::Dataset;
use jkt_utils::dates::format_date;
use std::ops::RangeInclusive;

/// Callback invoked synchronously with every freshly derived view.
pub type Listener = Box<dyn FnMut(&DashboardView)>;

/// Derive the bar chart, line chart and info panel for `dataset[index]`.
///
/// # Panics
///
/// If `index` is out of bounds. Selection controls are bounded to the
/// dataset, so an out-of-range index is a wiring bug, not runtime data.
pub fn derive_view(dataset: &Dataset, index: usize) -> DashboardView {
    assert!(
        index < dataset.len(),
        "selected index {} out of range for dataset of {} records",
        index,
        dataset.len()
    );
    let record = &dataset.records()[index];
    let classification = record.classification();
    let color = classification.color.css().to_string();
    let date = format_date(&record.date);

    let bar_chart = BarChartSpec {
        title: format!("Metrics for {}", date),
        categories: BAR_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        values: vec![
            f64::from(record.aqi),
            record.temperature,
            record.wind_speed,
        ],
        color: color.clone(),
        x_axis_label: "Metric".to_string(),
        y_axis_label: "Value".to_string(),
    };

    let line_chart = LineChartSpec {
        title: LINE_CHART_TITLE.to_string(),
        points: dataset
            .iter()
            .map(|r| DateValue {
                date: format_date(&r.date),
                value: f64::from(r.aqi),
            })
            .collect(),
        color: color.clone(),
        x_axis_label: "Date".to_string(),
        y_axis_label: "Air Quality Index".to_string(),
        markers: true,
    };

    let info = InfoPanel {
        date,
        aqi: record.aqi,
        category: classification.category.label().to_string(),
        advisory: classification.advisory.to_string(),
        temperature: record.temperature,
        wind_speed: record.wind_speed,
        color,
    };

    DashboardView {
        index,
        record: record.clone(),
        classification,
        bar_chart,
        line_chart,
        info,
    }
}

/// Single-writer state cell holding the selected index.
///
/// Writing a new index with [`select`](Self::select) re-derives the view
/// and calls every subscribed listener, in registration order, before
/// returning. The dataset is injected at construction and never mutated.
pub struct ViewBinder {
    dataset: Dataset,
    selected_index: usize,
    view: DashboardView,
    listeners: Vec<Listener>,
}

impl ViewBinder {
    /// Bind to `dataset` with the first record selected.
    pub fn new(dataset: Dataset) -> Self {
        let view = derive_view(&dataset, 0);
        Self {
            dataset,
            selected_index: 0,
            view,
            listeners: Vec::new(),
        }
    }

    /// Register a listener. It is not called until the next `select`.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&DashboardView) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Select `index`, re-derive every artifact and notify listeners.
    ///
    /// # Panics
    ///
    /// If `index` is outside [`slider_range`](Self::slider_range).
    pub fn select(&mut self, index: usize) -> &DashboardView {
        self.view = derive_view(&self.dataset, index);
        self.selected_index = index;
        log::debug!(
            "selected {} (AQI {}, {})",
            self.view.info.date,
            self.view.info.aqi,
            self.view.info.category
        );
        for listener in self.listeners.iter_mut() {
            listener(&self.view);
        }
        &self.view
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// View for the current selection.
    pub fn current(&self) -> &DashboardView {
        &self.view
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Valid slider positions: `0..=len-1`.
    pub fn slider_range(&self) -> RangeInclusive<usize> {
        0..=self.dataset.len() - 1
    }

    /// One `(index, "YYYY-MM-DD")` mark per record.
    pub fn slider_marks(&self) -> Vec<(usize, String)> {
        self.dataset
            .iter()
            .enumerate()
            .map(|(i, r)| (i, format_date(&r.date)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jkt_aqi::{AqiCategory, AqiColor};
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn embedded() -> Dataset {
        Dataset::embedded().unwrap()
    }

    #[test]
    fn test_selecting_moderate_day() {
        let view = derive_view(&embedded(), 4);
        assert_eq!(view.record.aqi, 89);
        assert_eq!(view.classification.category, AqiCategory::Moderate);
        assert_eq!(view.classification.color, AqiColor::Yellow);
        assert_eq!(view.bar_chart.values, vec![89.0, 27.0, 5.0]);
        assert_eq!(
            view.bar_chart.categories,
            vec!["AQI", "Temperature", "Wind Speed"]
        );
        assert_eq!(view.bar_chart.color, "yellow");
        assert_eq!(view.bar_chart.title, "Metrics for 2024-01-05");
        assert_eq!(view.line_chart.color, "yellow");
    }

    #[test]
    fn test_selecting_unhealthy_day() {
        let view = derive_view(&embedded(), 8);
        assert_eq!(view.classification.category, AqiCategory::Unhealthy);
        assert_eq!(view.classification.color, AqiColor::Red);
        assert_eq!(
            view.info.advisory,
            "Everyone may begin to experience health effects."
        );
        assert_eq!(view.info.aqi_line(), "AQI: 151 (Unhealthy)");
        assert_eq!(view.info.color, "red");
    }

    #[rstest]
    #[case(0, "orange")]
    #[case(4, "yellow")]
    #[case(8, "red")]
    #[case(9, "orange")]
    fn test_line_chart_is_full_and_ordered(#[case] index: usize, #[case] color: &str) {
        let dataset = embedded();
        let view = derive_view(&dataset, index);
        let line = &view.line_chart;
        assert_eq!(line.points.len(), 10);
        assert!(line.points.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(line.points[0].date, "2024-01-01");
        assert_eq!(line.points[9].date, "2024-02-05");
        assert_eq!(line.color, color);

        // Only the color depends on the selection.
        let baseline = derive_view(&dataset, 0).line_chart;
        assert_eq!(line.points, baseline.points);
        assert_eq!(line.title, baseline.title);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        derive_view(&embedded(), 10);
    }

    #[test]
    fn test_binder_starts_at_first_record() {
        let binder = ViewBinder::new(embedded());
        assert_eq!(binder.selected_index(), 0);
        assert_eq!(binder.current().info.date, "2024-01-01");
        assert_eq!(binder.slider_range(), 0..=9);
    }

    #[test]
    fn test_select_notifies_listeners_in_order() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let mut binder = ViewBinder::new(embedded());

        let first = Rc::clone(&seen);
        binder.subscribe(move |view| first.borrow_mut().push(format!("bar:{}", view.bar_chart.color)));
        let second = Rc::clone(&seen);
        binder.subscribe(move |view| second.borrow_mut().push(format!("line:{}", view.line_chart.color)));

        // Subscribing alone does not fire.
        assert!(seen.borrow().is_empty());

        let view = binder.select(4);
        assert_eq!(view.index, 4);
        assert_eq!(binder.selected_index(), 4);
        assert_eq!(*seen.borrow(), vec!["bar:yellow", "line:yellow"]);

        binder.select(8);
        assert_eq!(seen.borrow().len(), 4);
        assert_eq!(seen.borrow()[3], "line:red");
    }

    #[test]
    fn test_select_leaves_dataset_untouched() {
        let dataset = embedded();
        let mut binder = ViewBinder::new(dataset.clone());
        for i in binder.slider_range() {
            binder.select(i);
        }
        assert_eq!(binder.dataset(), &dataset);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_binder_rejects_out_of_range_index() {
        let mut binder = ViewBinder::new(embedded());
        binder.select(42);
    }

    #[test]
    fn test_failed_select_keeps_previous_selection() {
        let mut binder = ViewBinder::new(embedded());
        binder.select(3);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            binder.select(99);
        }));
        assert!(result.is_err());
        assert_eq!(binder.selected_index(), 3);
    }

    #[test]
    fn test_slider_marks() {
        let binder = ViewBinder::new(embedded());
        let marks = binder.slider_marks();
        assert_eq!(marks.len(), 10);
        assert_eq!(marks[0], (0, "2024-01-01".to_string()));
        assert_eq!(marks[5], (5, "2024-02-01".to_string()));
    }

    #[test]
    fn test_same_selection_derives_identical_view() {
        let dataset = embedded();
        assert_eq!(derive_view(&dataset, 6), derive_view(&dataset, 6));
        assert_eq!(
            derive_view(&dataset, 6).record.date,
            chrono::NaiveDate::from_ymd_opt(2024, 2, 2).unwrap()
        );
    }
}
