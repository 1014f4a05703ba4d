use jkt_aqi::Dataset;
use jkt_utils::dates::format_date;

/// One row per record with its classification.
pub fn run_table(dataset: &Dataset) -> String {
    let mut out = format!(
        "{:<3} {:<10} {:>4} {:>7} {:>6} {:>5}  {:<30} {}\n",
        "#", "DATE", "AQI", "TRAFFIC", "TEMP", "WIND", "CATEGORY", "COLOR"
    );
    for (i, record) in dataset.iter().enumerate() {
        let c = record.classification();
        out.push_str(&format!(
            "{:<3} {:<10} {:>4} {:>7} {:>6} {:>5}  {:<30} {}\n",
            i,
            format_date(&record.date),
            record.aqi,
            record.traffic_congestion,
            record.temperature,
            record.wind_speed,
            c.category.label(),
            c.color
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::run_table;
    use jkt_aqi::Dataset;

    #[test]
    fn test_run_table() {
        let out = run_table(&Dataset::embedded().unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("#   DATE"));
        assert!(lines[5].contains("2024-01-05"));
        assert!(lines[5].contains("Moderate"));
        assert!(lines[5].ends_with("Yellow"));
        assert!(lines[9].contains("Unhealthy "));
        assert!(lines[9].ends_with("Red"));
        assert!(lines[1].contains("Unhealthy for Sensitive Groups"));
    }
}
