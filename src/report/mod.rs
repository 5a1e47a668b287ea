//! Reporting utilities: dataset summary and sample previews.

pub mod format;

pub use format::*;
