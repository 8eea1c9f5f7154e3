//! Aggregation of a filtered view into summary statistics.
//!
//! This module transforms a filtered view into:
//! - Central tendency and spread (mean, median, min, max, count)
//! - Top and bottom performer rankings

pub mod ranking;
pub mod stats;

// Re-export main types and functions
pub use ranking::{bottom_n, top_n};
pub use stats::{aggregate, aggregate_with, StatsSummary};
