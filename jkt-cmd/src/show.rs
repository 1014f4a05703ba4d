use crate::Selection;
use anyhow::{bail, Context};
use jkt_aqi::Dataset;
use jkt_utils::dates::parse_date;
use jkt_view::ViewBinder;
use std::fmt::Write;

/// Resolve `selection` to an index, rejecting anything the slider could not
/// produce before it reaches the binder.
pub fn resolve_index(dataset: &Dataset, selection: &Selection) -> anyhow::Result<usize> {
    match (selection.index, selection.date.as_deref()) {
        (Some(index), _) => {
            if index >= dataset.len() {
                bail!(
                    "index {} is out of range (dataset has {} days, valid 0..={})",
                    index,
                    dataset.len(),
                    dataset.len() - 1
                );
            }
            Ok(index)
        }
        (None, Some(date)) => {
            let date = parse_date(date).with_context(|| format!("invalid date '{}'", date))?;
            dataset
                .position_of(date)
                .with_context(|| format!("no record for {}", date))
        }
        (None, None) => bail!("either --index or --date is required"),
    }
}

/// Select the requested day and render the info panel plus both chart specs.
pub fn run_show(dataset: Dataset, selection: &Selection) -> anyhow::Result<String> {
    let index = resolve_index(&dataset, selection)?;
    let mut binder = ViewBinder::new(dataset);
    let view = binder.select(index);

    let mut out = String::new();
    for line in view.info.lines() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "{} [{}]", view.bar_chart.title, view.bar_chart.color)?;
    for (category, value) in view.bar_chart.categories.iter().zip(&view.bar_chart.values) {
        writeln!(out, "  {:<12} {}", category, value)?;
    }
    writeln!(out)?;
    writeln!(out, "{} [{}]", view.line_chart.title, view.line_chart.color)?;
    for point in &view.line_chart.points {
        writeln!(out, "  {}  {}", point.date, point.value)?;
    }
    Ok(out)
}
