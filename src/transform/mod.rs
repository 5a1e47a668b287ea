//! Series → samples transform.
//!
//! Responsibilities:
//!
//! - slide a `look_back + 1` window over the raw rows (`window`)
//! - cut the samples into train/test partitions by position (`split`)

pub mod split;
pub mod window;

pub use split::*;
pub use window::*;
