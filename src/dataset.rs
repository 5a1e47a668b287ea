//! Indexed access to windowed samples.
//!
//! Construction is two-phase:
//!
//! 1. [`load_and_transform`] reads the cached CSV and windows it (no network)
//! 2. [`BirthsDataset::from_windowed`] keeps one partition behind the
//!    read-only [`SequenceDataset`] interface
//!
//! [`BirthsDataset::open`] chains fetch → load → window → split for callers
//! that just want a ready dataset.

use std::path::Path;

use log::info;

use crate::data::{Fetcher, ProgressFactory, ensure_dataset_files};
use crate::domain::{DatasetConfig, Partition, Record};
use crate::error::AppError;
use crate::io::load_records;
use crate::transform::{Windowed, make_windows, split};

/// A sized, integer-indexed collection of `(window, label)` samples.
///
/// This is the contract a sequential training loop needs; it is independent
/// of any particular ML framework.
pub trait SequenceDataset {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at `index`, or an `Index` error when `index >= len()`.
    fn get(&self, index: usize) -> Result<(&[Self::Item], &Self::Item), AppError>;
}

/// Read the CSV at `csv_path` and window it with `look_back`.
pub fn load_and_transform(csv_path: &Path, look_back: usize) -> Result<Windowed<Record>, AppError> {
    let records = load_records(csv_path)?;
    Ok(make_windows(&records, look_back))
}

/// One partition of the daily-female-births samples. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthsDataset {
    samples: Windowed<Record>,
    partition: Partition,
}

impl BirthsDataset {
    /// Keep `partition` of already-windowed samples.
    pub fn from_windowed(windowed: Windowed<Record>, partition: Partition) -> Self {
        Self {
            samples: split(windowed, partition),
            partition,
        }
    }

    /// Window and split in-memory rows.
    pub fn from_rows(rows: &[Record], look_back: usize, partition: Partition) -> Self {
        Self::from_windowed(make_windows(rows, look_back), partition)
    }

    /// Build from a CSV already on disk.
    pub fn from_csv(csv_path: &Path, look_back: usize, partition: Partition) -> Result<Self, AppError> {
        Ok(Self::from_windowed(load_and_transform(csv_path, look_back)?, partition))
    }

    /// Ensure the dataset files are cached under `config.data_dir`, then build.
    pub fn open(
        config: &DatasetConfig,
        fetcher: &dyn Fetcher,
        progress: &ProgressFactory<'_>,
    ) -> Result<Self, AppError> {
        let csv = ensure_dataset_files(&config.data_dir, fetcher, progress)?;
        let dataset = Self::from_csv(&csv, config.look_back, config.partition)?;
        info!(
            "{} partition: {} samples (look_back={})",
            config.partition.display_name(),
            dataset.len(),
            config.look_back
        );
        Ok(dataset)
    }

    pub fn look_back(&self) -> usize {
        self.samples.look_back()
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    pub fn inputs(&self) -> &[Vec<Record>] {
        self.samples.inputs()
    }

    pub fn labels(&self) -> &[Record] {
        self.samples.labels()
    }

    /// Samples in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&[Record], &Record)> + '_ {
        self.samples
            .inputs()
            .iter()
            .map(Vec::as_slice)
            .zip(self.samples.labels())
    }
}

impl SequenceDataset for BirthsDataset {
    type Item = Record;

    fn len(&self) -> usize {
        self.samples.len()
    }

    fn get(&self, index: usize) -> Result<(&[Record], &Record), AppError> {
        match (self.samples.inputs().get(index), self.samples.labels().get(index)) {
            (Some(input), Some(label)) => Ok((input.as_slice(), label)),
            _ => Err(AppError::index(index, self.len())),
        }
    }
}
