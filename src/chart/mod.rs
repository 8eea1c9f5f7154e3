//! Chart rendering for a dashboard snapshot.
//!
//! This module converts a snapshot into:
//! - A horizontal SVG bar chart (dark theme)
//! - A terminal summary with metrics, rankings and a text bar chart

pub mod generator;
pub mod text;

// Re-export main types
pub use generator::{generate_bar_chart, ChartConfig};
pub use text::{format_percent, generate_text_summary};
