//! Token Dash
//!
//! Filter, rank and chart a snapshot of token profit/loss percentages.
//!
//! The pipeline is two pure steps over an injected dataset:
//! [`filter::filter`] keeps records inside a P/L% range and token selection,
//! sorted ascending, and [`aggregator::aggregate`] derives mean, median,
//! min, max, count and the top/bottom performers. [`dashboard::Dashboard`]
//! wires the two together; `chart` and `output` render the result.
//!
//! ## Getting Started
//!
//! ```bash
//! token-dash show --min 50 --max 70 --chart chart.svg
//! echo '{"tokens": ["RENDER"]}' | token-dash query
//! ```

pub mod aggregator;
pub mod assets;
pub mod chart;
pub mod commands;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod output;
pub mod utils;
