use crate::category::{classify, Classification};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's observed environmental metrics for Jakarta.
///
/// Field names follow the dataset CSV header:
/// `date,AQI,traffic_congestion,temperature,wind_speed`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date of the observation ("YYYY-MM-DD" in CSV)
    pub date: NaiveDate,
    /// Air Quality Index
    #[serde(rename = "AQI")]
    pub aqi: i32,
    /// Traffic congestion index
    pub traffic_congestion: i32,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Wind speed in meters per second
    pub wind_speed: f64,
}

impl Record {
    /// Classification of this record's AQI, recomputed on every call.
    pub fn classification(&self) -> Classification {
        classify(self.aqi)
    }
}
