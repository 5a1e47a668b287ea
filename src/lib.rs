//! `female-births` library crate.
//!
//! Loads the daily-total-female-births series, downloading it on first use,
//! and serves it as sliding-window `(window, label)` samples split 80/20 into
//! train and test partitions.
//!
//! The binary (`births`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - training code can depend on the dataset directly

pub mod app;
pub mod cli;
pub mod data;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod progress;
pub mod report;
pub mod transform;

pub use dataset::{BirthsDataset, SequenceDataset, load_and_transform};
pub use domain::{DatasetConfig, Partition, Record};
pub use error::{AppError, ErrorKind};
