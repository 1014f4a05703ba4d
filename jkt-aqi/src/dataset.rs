use crate::error::{AqiError, Result};
use crate::record::Record;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::path::Path;

/// The Jakarta 2024 dataset shipped with the crate.
pub const EMBEDDED_CSV: &str = include_str!("../../fixtures/jakarta_aqi.csv");

/// Ordered, read-only collection of daily records.
///
/// A `Dataset` always holds at least one record and its dates are strictly
/// ascending. There is no way to mutate it after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, validating that it is non-empty and date-ordered.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(AqiError::EmptyDataset);
        }
        for (index, pair) in records.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(AqiError::UnorderedDates {
                    index: index + 1,
                    previous: pair[0].date,
                    current: pair[1].date,
                });
            }
        }
        Ok(Self { records })
    }

    /// Parse a CSV string with header `date,AQI,traffic_congestion,temperature,wind_speed`.
    pub fn parse_csv(csv_object: &str) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        let records = rdr
            .deserialize::<Record>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        log::debug!("parsed {} AQI records", records.len());
        Self::new(records)
    }

    /// Read and parse a dataset CSV file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_csv(&contents)
    }

    /// The ten-row Jakarta 2024 dataset.
    pub fn embedded() -> Result<Self> {
        Self::parse_csv(EMBEDDED_CSV)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Index of the record observed on `date`, if any.
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.records.binary_search_by(|r| r.date.cmp(&date)).ok()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
