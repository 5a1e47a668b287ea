//! Command-line parsing for the `births` tool.
//!
//! Argument parsing and command dispatch stay separate from the dataset code;
//! `app` maps these structs onto `DatasetConfig`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_LOOK_BACK, ExportFormat, Partition};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "births",
    version,
    about = "Daily female births dataset: download, window, and split for sequence models"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the CSV and `.names` files into the data directory if missing.
    Fetch(FetchArgs),
    /// Print a dataset summary, a sample preview, and a plot of the series.
    Inspect(InspectArgs),
    /// Write one partition's samples to CSV or JSON.
    Export(ExportArgs),
}

#[derive(Debug, Args, Clone)]
pub struct FetchArgs {
    /// Directory where the dataset files are cached.
    #[arg(short = 'd', long, default_value = "data")]
    pub data_dir: PathBuf,
}

/// Options shared by every command that builds samples.
#[derive(Debug, Args, Clone)]
pub struct DatasetArgs {
    /// Directory where the dataset files are cached.
    #[arg(short = 'd', long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Number of historical days per sample.
    #[arg(short = 'l', long, default_value_t = DEFAULT_LOOK_BACK)]
    pub look_back: usize,

    /// Which side of the 80/20 split to use.
    #[arg(short = 'p', long, value_enum, default_value_t = Partition::Test)]
    pub partition: Partition,
}

#[derive(Debug, Args, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Number of samples to preview.
    #[arg(long, default_value_t = 5)]
    pub preview: usize,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Output file.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: PathBuf,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}
