//! Command implementations for JKT CLI.
//!
//! Subcommands classify a single AQI value, show the dashboard view for one
//! day, or tabulate the whole dataset.

use anyhow::Context;
use clap::{Args, Subcommand};
use jkt_aqi::Dataset;
use std::path::Path;

pub mod classify;
pub mod show;
pub mod table;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify an AQI value into category, color and health advisory
    Classify {
        /// AQI value (negative or above 500 classifies as Unknown)
        #[arg(allow_negative_numbers = true)]
        aqi: i32,
    },

    /// Show the charts' data and health panel for one day
    Show {
        #[command(flatten)]
        selection: Selection,
    },

    /// List every day with its classification
    Table,
}

/// Which day to show: by slider position or by date.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Selection {
    /// Position in the dataset (0-based)
    #[arg(short, long)]
    pub index: Option<usize>,

    /// Date in YYYY-MM-DD format
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Load the dataset from `csv`, or the embedded Jakarta 2024 data when `None`.
pub fn load_dataset(csv: Option<&Path>) -> anyhow::Result<Dataset> {
    match csv {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("failed to load dataset from {}", path.display())),
        None => Dataset::embedded().context("embedded dataset is invalid"),
    }
}

pub fn run(command: Command, csv: Option<&Path>) -> anyhow::Result<()> {
    match command {
        Command::Classify { aqi } => {
            print!("{}", classify::run_classify(aqi));
            Ok(())
        }
        Command::Show { selection } => {
            let dataset = load_dataset(csv)?;
            print!("{}", show::run_show(dataset, &selection)?);
            Ok(())
        }
        Command::Table => {
            let dataset = load_dataset(csv)?;
            print!("{}", table::run_table(&dataset));
            Ok(())
        }
    }
}
