//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the raw series row (`Record`)
//! - partition/format selectors (`Partition`, `ExportFormat`)
//! - dataset configuration (`DatasetConfig`) and summary stats (`SeriesStats`)

pub mod types;

pub use types::*;
