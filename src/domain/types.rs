//! Shared domain types.
//!
//! These types are kept small so they can be:
//!
//! - held in memory by the dataset
//! - exported to JSON/CSV
//! - mapped from CLI arguments without extra glue

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

/// Default number of historical records per sample.
pub const DEFAULT_LOOK_BACK: usize = 6;

/// One row of the raw series: a calendar day and its birth count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record {
    pub date: NaiveDate,
    pub count: f64,
}

/// Which side of the positional 80/20 split to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Partition {
    /// Leading 80% of samples.
    Train,
    /// Trailing 20% of samples.
    #[default]
    Test,
}

impl Partition {
    pub fn display_name(self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Test => "test",
        }
    }
}

/// Output format for `births export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Everything needed to build a dataset from the local cache.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    /// Directory holding (or receiving) the cached CSV and `.names` files.
    pub data_dir: PathBuf,
    pub look_back: usize,
    pub partition: Partition,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            look_back: DEFAULT_LOOK_BACK,
            partition: Partition::default(),
        }
    }
}

/// Summary stats about the raw series, used by the `inspect` report.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStats {
    pub n_rows: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub count_min: f64,
    pub count_max: f64,
    pub count_mean: f64,
}

impl SeriesStats {
    /// `None` for an empty series.
    pub fn from_records(records: &[Record]) -> Option<Self> {
        let first = records.first()?;
        let last = records.last()?;

        let mut count_min = f64::INFINITY;
        let mut count_max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for r in records {
            count_min = count_min.min(r.count);
            count_max = count_max.max(r.count);
            sum += r.count;
        }

        Some(Self {
            n_rows: records.len(),
            first_date: first.date,
            last_date: last.date,
            count_min,
            count_max,
            count_mean: sum / records.len() as f64,
        })
    }
}
