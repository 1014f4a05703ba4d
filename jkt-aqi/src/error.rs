/// Error types for the AQI library
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum AqiError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to read a dataset file
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset must hold at least one record
    #[error("Dataset contains no records")]
    EmptyDataset,

    /// Records must be strictly ascending by date
    #[error("Record {index} is out of date order ({current} follows {previous})")]
    UnorderedDates {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },
}

/// Type alias for Results using AqiError
pub type Result<T> = std::result::Result<T, AqiError>;
