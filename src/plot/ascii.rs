//! ASCII plotting of the raw series for terminal output.
//!
//! Fixed-size character grid, deterministic (golden-testable).
//!
//! Plot elements:
//! - observations: `*`
//! - segments between consecutive observations: `.`
//! - optional split boundary: `|` column

use crate::domain::Record;

/// Render `records` (in row order) as a `width` x `height` plot.
///
/// `boundary` is a row index to mark with a vertical bar, typically the first
/// row labelled as test data.
pub fn render_series_plot(records: &[Record], boundary: Option<usize>, width: usize, height: usize) -> String {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return "Plot: (empty series)\n".to_string();
    };

    let width = width.max(10);
    let height = height.max(5);
    let n = records.len();

    let (y_min, y_max) = count_range(records).unwrap_or((first.count - 1.0, first.count + 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    let boundary = boundary.filter(|&b| b < n);
    if let Some(b) = boundary {
        let x = map_x(b, n, width);
        for row in grid.iter_mut() {
            row[x] = '|';
        }
    }

    let mut prev = None;
    for (i, r) in records.iter().enumerate() {
        let x = map_x(i, n, width);
        let y = map_y(r.count, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(&mut grid, x0, y0, x, y, '.');
        }
        grid[y][x] = '*';
        prev = Some((x, y));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {}..{} (n={n}) | births=[{y_min:.1}, {y_max:.1}]",
        first.date, last.date
    ));
    if let Some(b) = boundary {
        out.push_str(&format!(" | split at {}", records[b].date));
    }
    out.push('\n');

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn count_range(records: &[Record]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for r in records {
        min_y = min_y.min(r.count);
        max_y = max_y.max(r.count);
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(i: usize, n: usize, width: usize) -> usize {
    if n < 2 {
        return 0;
    }
    let u = i as f64 / (n as f64 - 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish). Only fills blank cells.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
