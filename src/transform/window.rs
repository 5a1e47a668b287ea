//! Sliding-window construction.
//!
//! A window is `look_back + 1` consecutive rows: the first `look_back` rows are
//! the model input and the last row is the next-step label.
//!
//! The offset range stops one short of the last full window, so a series of
//! length `N` yields `N - (look_back + 1)` samples rather than `N - look_back`.

/// Materialized `(inputs, labels)` pairs in chronological order.
///
/// `inputs()[i]` always has exactly `look_back()` elements and `labels()[i]`
/// is the row that followed it in the source series. Only [`make_windows`]
/// builds one, and the split helpers below keep both sides the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Windowed<T> {
    inputs: Vec<Vec<T>>,
    labels: Vec<T>,
    look_back: usize,
}

impl<T> Windowed<T> {
    fn empty(look_back: usize) -> Self {
        Self {
            inputs: Vec::new(),
            labels: Vec::new(),
            look_back,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn look_back(&self) -> usize {
        self.look_back
    }

    pub fn inputs(&self) -> &[Vec<T>] {
        &self.inputs
    }

    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Keep the first `len` samples (no-op when `len >= self.len()`).
    pub(crate) fn truncate(&mut self, len: usize) {
        self.inputs.truncate(len);
        self.labels.truncate(len);
    }

    /// Move samples `[at, len)` into a new `Windowed`. `at` is clamped to `len`.
    pub(crate) fn split_off(&mut self, at: usize) -> Self {
        let at = at.min(self.len());
        Self {
            inputs: self.inputs.split_off(at),
            labels: self.labels.split_off(at),
            look_back: self.look_back,
        }
    }
}

/// Number of samples `make_windows` produces for `n_rows` rows.
pub fn sample_count(n_rows: usize, look_back: usize) -> usize {
    match look_back.checked_add(1) {
        Some(width) if look_back > 0 => n_rows.saturating_sub(width),
        _ => 0,
    }
}

/// Build overlapping windows with next-step labels.
///
/// Degenerate inputs (`look_back == 0`, or too few rows for a single sample)
/// produce an empty result rather than an error.
pub fn make_windows<T: Clone>(rows: &[T], look_back: usize) -> Windowed<T> {
    let n = sample_count(rows.len(), look_back);
    if n == 0 {
        return Windowed::empty(look_back);
    }

    let mut inputs = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);

    for window in rows.windows(look_back + 1).take(n) {
        let (input, label) = window.split_at(look_back);
        inputs.push(input.to_vec());
        labels.push(label[0].clone());
    }

    Windowed {
        inputs,
        labels,
        look_back,
    }
}
