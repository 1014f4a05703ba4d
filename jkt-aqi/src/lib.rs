//! Core types for the Jakarta air quality dashboard.
//!
//! - `category`: the AQI classifier (category, display color, health advisory)
//! - `record`: one day's observed metrics
//! - `dataset`: the ordered, read-only collection of records
//! - `error`: error type for dataset construction

pub mod category;
pub mod dataset;
pub mod error;
pub mod record;

pub use category::{classify, AqiCategory, AqiColor, Classification};
pub use dataset::Dataset;
pub use error::{AqiError, Result};
pub use record::Record;
