//! Remote dataset access.
//!
//! - streaming download-if-missing (`fetch`)
//! - dataset URLs and cache layout (`source`)

pub mod fetch;
pub mod source;

pub use fetch::{CHUNK_SIZE, Fetcher, HttpFetcher, ensure_local};
pub use source::{BASE_URL, CSV_FILE, NAMES_FILE, ProgressFactory, ensure_dataset_files};
