//! Export a partition's samples to CSV or JSON.
//!
//! CSV is one row per sample, wide format, easy to load in a spreadsheet:
//! `index,start_date,x_0..x_{L-1},label_date,y`.
//!
//! JSON keeps the full records (date + count) for every window element.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::dataset::BirthsDataset;
use crate::domain::{ExportFormat, Record};
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct SampleJson<'a> {
    index: usize,
    window: &'a [Record],
    label: &'a Record,
}

#[derive(Debug, Serialize)]
struct ExportJson<'a> {
    partition: &'static str,
    look_back: usize,
    samples: Vec<SampleJson<'a>>,
}

pub fn write_samples(path: &Path, dataset: &BirthsDataset, format: ExportFormat) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export file '{}': {e}", path.display())))?;
    match format {
        ExportFormat::Csv => write_samples_csv(file, dataset),
        ExportFormat::Json => write_samples_json(file, dataset),
    }
}

pub fn write_samples_csv<W: Write>(writer: W, dataset: &BirthsDataset) -> Result<(), AppError> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec!["index".to_string(), "start_date".to_string()];
    header.extend((0..dataset.look_back()).map(|i| format!("x_{i}")));
    header.push("label_date".to_string());
    header.push("y".to_string());
    out.write_record(&header)
        .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;

    for (index, (window, label)) in dataset.iter().enumerate() {
        let mut row = Vec::with_capacity(header.len());
        row.push(index.to_string());
        row.push(window.first().map(|r| r.date.to_string()).unwrap_or_default());
        row.extend(window.iter().map(|r| r.count.to_string()));
        row.push(label.date.to_string());
        row.push(label.count.to_string());
        out.write_record(&row)
            .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    out.flush()
        .map_err(|e| AppError::io(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

pub fn write_samples_json<W: Write>(writer: W, dataset: &BirthsDataset) -> Result<(), AppError> {
    let doc = ExportJson {
        partition: dataset.partition().display_name(),
        look_back: dataset.look_back(),
        samples: dataset
            .iter()
            .enumerate()
            .map(|(index, (window, label))| SampleJson { index, window, label })
            .collect(),
    };

    let mut out = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut out, &doc)
        .map_err(|e| AppError::io(format!("Failed to write export JSON: {e}")))?;
    out.flush()
        .map_err(|e| AppError::io(format!("Failed to flush export JSON: {e}")))?;
    Ok(())
}
