//! Top-level application orchestration.
//!
//! `src/main.rs` only maps errors to exit codes; this module is the "real main":
//! - initializes logging and the progress display
//! - parses CLI arguments
//! - runs the load pipeline
//! - prints reports/plots
//! - writes exports

use clap::Parser;
use indicatif::MultiProgress;
use log::info;

use crate::cli::{Command, DatasetArgs, ExportArgs, FetchArgs, InspectArgs};
use crate::data::{HttpFetcher, ensure_dataset_files};
use crate::domain::DatasetConfig;
use crate::error::AppError;
use crate::progress::{IndicatifProgress, ProgressCallback};

pub mod pipeline;

/// Entry point for the `births` binary.
pub fn run() -> Result<(), AppError> {
    let multi = crate::progress::init_logger();
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Fetch(args) => handle_fetch(args, &multi),
        Command::Inspect(args) => handle_inspect(args, &multi),
        Command::Export(args) => handle_export(args, &multi),
    }
}

fn download_bars(multi: &MultiProgress) -> impl Fn(&str) -> Box<dyn ProgressCallback> + '_ {
    move |file: &str| -> Box<dyn ProgressCallback> { Box::new(IndicatifProgress::download_bar(multi, file)) }
}

fn handle_fetch(args: FetchArgs, multi: &MultiProgress) -> Result<(), AppError> {
    let fetcher = HttpFetcher::new();
    let csv = ensure_dataset_files(&args.data_dir, &fetcher, &download_bars(multi))?;
    info!("Dataset ready at {}", csv.display());
    Ok(())
}

fn handle_inspect(args: InspectArgs, multi: &MultiProgress) -> Result<(), AppError> {
    let config = dataset_config_from_args(&args.dataset);
    let run = pipeline::run_load(&config, &HttpFetcher::new(), &download_bars(multi))?;

    print!(
        "{}",
        crate::report::format_summary(run.stats.as_ref(), run.total_samples, run.split_index, &run.dataset)
    );
    print!("{}", crate::report::format_preview(&run.dataset, args.preview));

    if !args.no_plot {
        let plot = crate::plot::render_series_plot(&run.records, run.first_test_row(), args.width, args.height);
        println!("\n{plot}");
    }

    Ok(())
}

fn handle_export(args: ExportArgs, multi: &MultiProgress) -> Result<(), AppError> {
    let config = dataset_config_from_args(&args.dataset);
    let run = pipeline::run_load(&config, &HttpFetcher::new(), &download_bars(multi))?;

    crate::io::write_samples(&args.out, &run.dataset, args.format)?;
    info!(
        "Wrote {} {} samples to {}",
        run.dataset.labels().len(),
        config.partition.display_name(),
        args.out.display()
    );
    Ok(())
}

pub fn dataset_config_from_args(args: &DatasetArgs) -> DatasetConfig {
    DatasetConfig {
        data_dir: args.data_dir.clone(),
        look_back: args.look_back,
        partition: args.partition,
    }
}
