use jkt_aqi::classify;

/// Render the classification of `aqi` as three labelled lines.
pub fn run_classify(aqi: i32) -> String {
    let c = classify(aqi);
    log::debug!("classified AQI {} as {}", aqi, c.category);
    format!(
        "AQI: {}\nCategory: {}\nColor: {}\nHealth Implications: {}\n",
        aqi, c.category, c.color, c.advisory
    )
}
