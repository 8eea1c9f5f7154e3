//! Token records and the immutable dataset they live in.
//!
//! A dataset is built once (from the bundled sample or a file) and then
//! handed to the filter engine by reference. Nothing mutates it afterwards.

pub mod loader;
pub mod record;
pub mod sample;

// Re-export main types and functions
pub use loader::{load_dataset, parse_dataset_json, parse_dataset_toml};
pub use record::{Dataset, Record};
pub use sample::sample_dataset;
