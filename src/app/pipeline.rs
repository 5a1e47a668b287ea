//! Shared load pipeline used by the `inspect` and `export` commands.
//!
//! fetch-if-missing -> CSV ingest -> windows -> split
//!
//! The full (unsplit) sample count is kept alongside the chosen partition so
//! reports can show where the split fell.

use crate::data::{Fetcher, ProgressFactory, ensure_dataset_files};
use crate::dataset::BirthsDataset;
use crate::domain::{DatasetConfig, Record, SeriesStats};
use crate::error::AppError;
use crate::io::load_records;
use crate::transform::{make_windows, split_index};

/// All computed outputs of a single load.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub records: Vec<Record>,
    pub stats: Option<SeriesStats>,
    pub total_samples: usize,
    pub split_index: usize,
    pub dataset: BirthsDataset,
}

impl RunOutput {
    /// Row index of the first test label, if there are test samples.
    pub fn first_test_row(&self) -> Option<usize> {
        (self.split_index < self.total_samples).then(|| self.split_index + self.dataset.look_back())
    }
}

/// Ensure the cache is populated, then load and transform.
pub fn run_load(
    config: &DatasetConfig,
    fetcher: &dyn Fetcher,
    progress: &ProgressFactory<'_>,
) -> Result<RunOutput, AppError> {
    let csv = ensure_dataset_files(&config.data_dir, fetcher, progress)?;
    let records = load_records(&csv)?;
    Ok(run_load_with_records(config, records))
}

/// Transform already-loaded rows.
pub fn run_load_with_records(config: &DatasetConfig, records: Vec<Record>) -> RunOutput {
    let stats = SeriesStats::from_records(&records);
    let windowed = make_windows(&records, config.look_back);
    let total_samples = windowed.len();
    let dataset = BirthsDataset::from_windowed(windowed, config.partition);

    RunOutput {
        records,
        stats,
        total_samples,
        split_index: split_index(total_samples),
        dataset,
    }
}
