//! Selection state and derived views for the Jakarta AQI dashboard.
//!
//! A single selected index drives everything shown on screen. On each
//! selection the [`binder::ViewBinder`] re-derives three artifacts from the
//! selected record:
//!
//! - a [`models::BarChartSpec`] of AQI, temperature and wind speed for that day
//! - a [`models::LineChartSpec`] of AQI across every day, in date order
//! - an [`models::InfoPanel`] with the category and health advisory
//!
//! # Usage
//!
//! ```rust
//! use jkt_aqi::Dataset;
//! use jkt_view::ViewBinder;
//!
//! let mut binder = ViewBinder::new(Dataset::embedded().unwrap());
//! binder.subscribe(|view| println!("{}", view.info.aqi_line()));
//!
//! let view = binder.select(4);
//! assert_eq!(view.classification.category.label(), "Moderate");
//! assert_eq!(view.line_chart.color, "yellow");
//! ```

pub mod binder;
pub mod models;

pub use binder::{derive_view, Listener, ViewBinder};
pub use models::{BarChartSpec, DashboardView, DateValue, InfoPanel, LineChartSpec};
