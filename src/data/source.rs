//! Location of the daily-total-female-births dataset and its local cache.

use std::path::{Path, PathBuf};

use log::debug;

use crate::data::fetch::{Fetcher, ensure_local};
use crate::error::AppError;
use crate::progress::ProgressCallback;

pub const BASE_URL: &str = "https://raw.githubusercontent.com/jbrownlee/Datasets/master/";
pub const CSV_FILE: &str = "daily-total-female-births.csv";
/// Free-text description of the dataset. Fetched alongside the CSV, never parsed.
pub const NAMES_FILE: &str = "daily-total-female-births.names";

/// Builds one progress indicator per file, labelled with the file name.
pub type ProgressFactory<'a> = dyn Fn(&str) -> Box<dyn ProgressCallback> + 'a;

pub fn file_url(file: &str) -> String {
    format!("{BASE_URL}{file}")
}

pub fn csv_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CSV_FILE)
}

pub fn names_path(data_dir: &Path) -> PathBuf {
    data_dir.join(NAMES_FILE)
}

/// Make sure both dataset files are cached under `data_dir`.
///
/// Returns the path of the CSV file.
pub fn ensure_dataset_files(
    data_dir: &Path,
    fetcher: &dyn Fetcher,
    progress: &ProgressFactory<'_>,
) -> Result<PathBuf, AppError> {
    let csv = csv_path(data_dir);
    for (file, dest) in [(CSV_FILE, csv.clone()), (NAMES_FILE, names_path(data_dir))] {
        // Checked here as well so a cached file never draws a bar.
        if dest.exists() {
            debug!("Using cached {}", dest.display());
            continue;
        }
        let bar = progress(file);
        ensure_local(fetcher, &file_url(file), &dest, bar.as_ref())?;
    }
    Ok(csv)
}
