//! Range and selection filtering over a dataset.
//!
//! This module turns a dataset plus the current widget state into:
//! - Filter parameters (range + selected tokens)
//! - A filtered view sorted ascending by P/L%

pub mod engine;
pub mod params;

// Re-export main types and functions
pub use engine::{filter, FilteredView};
pub use params::{normalize_token, FilterParams, TokenSelection};
