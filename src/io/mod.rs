//! Input/output helpers.
//!
//! - CSV ingest of the raw series (`ingest`)
//! - sample exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
