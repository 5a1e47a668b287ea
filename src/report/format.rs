//! Formatted terminal output for `births inspect`.
//!
//! Formatting lives here so the dataset code stays free of presentation
//! concerns and output changes stay localized.

use crate::dataset::{BirthsDataset, SequenceDataset};
use crate::domain::{Record, SeriesStats};

/// Format the dataset summary (raw series + windowing + split).
pub fn format_summary(
    stats: Option<&SeriesStats>,
    total_samples: usize,
    split_index: usize,
    dataset: &BirthsDataset,
) -> String {
    let mut out = String::new();

    out.push_str("=== births - daily total female births ===\n");
    match stats {
        Some(s) => {
            out.push_str(&format!(
                "Rows: n={} | dates=[{}, {}]\n",
                s.n_rows, s.first_date, s.last_date
            ));
            out.push_str(&format!(
                "Births/day: min={:.0} | max={:.0} | mean={:.2}\n",
                s.count_min, s.count_max, s.count_mean
            ));
        }
        None => out.push_str("Rows: n=0\n"),
    }

    out.push_str(&format!(
        "Windows: look_back={} | samples={}\n",
        dataset.look_back(),
        total_samples
    ));
    out.push_str(&format!(
        "Split: train=[0, {split_index}) | test=[{split_index}, {total_samples})\n"
    ));
    out.push_str(&format!(
        "Partition: {} (n={})\n",
        dataset.partition().display_name(),
        dataset.len()
    ));

    out
}

/// Format the first `limit` samples of `dataset`, one per line.
pub fn format_preview(dataset: &BirthsDataset, limit: usize) -> String {
    let mut out = String::new();
    if dataset.is_empty() || limit == 0 {
        return out;
    }

    out.push_str(&format!(
        "\nFirst {} {} samples:\n",
        limit.min(dataset.len()),
        dataset.partition().display_name()
    ));
    out.push_str(&format!("{:>5}  {:<10}  {:<10}  {}\n", "#", "from", "label", "x -> y"));

    for (i, (window, label)) in dataset.iter().take(limit).enumerate() {
        let from = window.first().map(|r| r.date.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{:>5}  {:<10}  {:<10}  [{}] -> {}\n",
            i,
            from,
            label.date,
            fmt_counts(window),
            fmt_count(label.count)
        ));
    }

    out
}

fn fmt_counts(window: &[Record]) -> String {
    let parts: Vec<String> = window.iter().map(|r| fmt_count(r.count)).collect();
    parts.join(", ")
}

fn fmt_count(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.2}") }
}
