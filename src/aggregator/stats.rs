//! Summary statistics over a filtered view.
//!
//! Values are stored at full precision. Rounding to two decimals is left
//! to the renderers.

use super::ranking::{bottom_n, top_n};
use crate::dataset::Record;
use crate::filter::FilteredView;
use crate::utils::config::DEFAULT_TOP_N;
use log::debug;
use serde::{Deserialize, Serialize};

/// Statistics derived from one filtered view
///
/// **Public** - returned from aggregate
///
/// The four statistics are `None` for an empty view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Arithmetic mean of P/L%
    pub mean: Option<f64>,

    /// Median P/L% (average of the two middle values for even counts)
    pub median: Option<f64>,

    pub min: Option<f64>,

    pub max: Option<f64>,

    /// Number of records in the view
    pub count: usize,

    /// Largest P/L% first
    #[serde(rename = "top")]
    pub top_n: Vec<Record>,

    /// Smallest P/L% first
    #[serde(rename = "bottom")]
    pub bottom_n: Vec<Record>,
}

impl StatsSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Count: {} | Mean: {} | Median: {} | Min: {} | Max: {}",
            self.count,
            fmt_opt(self.mean),
            fmt_opt(self.median),
            fmt_opt(self.min),
            fmt_opt(self.max)
        )
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v))
}

/// Aggregate a view with the default top/bottom size (5)
///
/// **Public** - main entry point for aggregation
pub fn aggregate(view: &FilteredView) -> StatsSummary {
    aggregate_with(view, DEFAULT_TOP_N)
}

/// Aggregate a view keeping `n` top and bottom performers
pub fn aggregate_with(view: &FilteredView, n: usize) -> StatsSummary {
    debug!("Aggregating {} records (n = {})", view.len(), n);

    if view.is_empty() {
        return StatsSummary::default();
    }

    let values: Vec<f64> = view.iter().map(|r| r.pl_percent).collect();
    let count = values.len();
    let mean = arithmetic_mean(&values);

    StatsSummary {
        mean: Some(mean),
        median: median(&values),
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
        count,
        top_n: top_n(view.records(), n),
        bottom_n: bottom_n(view.records(), n),
    }
}

/// Arithmetic mean of a non-empty slice
///
/// **Private** - internal helper
///
/// Falls back to dividing each value first when the plain sum overflows.
fn arithmetic_mean(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        values.iter().map(|v| v / n).sum()
    }
}

/// Median of unsorted values
///
/// **Private** - internal helper
fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(sorted[mid - 1] / 2.0 + sorted[mid] / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(values: &[f64]) -> FilteredView {
        FilteredView::from_records(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Record::new(format!("T{}", i), *v))
                .collect(),
        )
    }

    #[test]
    fn test_aggregate_odd_count() {
        let stats = aggregate(&view(&[4.0, 1.0, 10.0]));
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, Some(5.0));
        assert_eq!(stats.median, Some(4.0));
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(10.0));
    }

    #[test]
    fn test_aggregate_even_count_median() {
        let stats = aggregate(&view(&[1.0, 2.0, 3.0, 10.0]));
        assert_eq!(stats.median, Some(2.5));
        assert_eq!(stats.mean, Some(4.0));
    }

    #[test]
    fn test_aggregate_empty() {
        let stats = aggregate(&FilteredView::default());
        assert!(stats.is_empty());
        assert_eq!(stats.mean, None);
        assert_eq!(stats.median, None);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert!(stats.top_n.is_empty());
        assert!(stats.bottom_n.is_empty());
    }

    #[test]
    fn test_aggregate_with_custom_n() {
        let stats = aggregate_with(&view(&[1.0, 2.0, 3.0, 4.0]), 2);
        assert_eq!(stats.top_n.len(), 2);
        assert_eq!(stats.top_n[0].pl_percent, 4.0);
        assert_eq!(stats.bottom_n[0].pl_percent, 1.0);
    }

    #[test]
    fn test_aggregate_huge_values_stay_finite() {
        let stats = aggregate(&view(&[1e308, 1.5e308]));

        let (mean, median) = (stats.mean.unwrap(), stats.median.unwrap());
        assert!(mean.is_finite());
        assert!(median.is_finite());
        assert!(stats.min.unwrap() <= mean && mean <= stats.max.unwrap());
        assert!(stats.min.unwrap() <= median && median <= stats.max.unwrap());
    }

    #[test]
    fn test_summary_line() {
        let empty = StatsSummary::default();
        assert!(empty.summary().contains("Mean: n/a"));

        let stats = aggregate(&view(&[1.0, 2.0]));
        assert!(stats.summary().contains("Median: 1.50%"));
    }

    #[test]
    fn test_empty_serializes_nulls() {
        let json = serde_json::to_value(StatsSummary::default()).unwrap();
        assert!(json["mean"].is_null());
        assert_eq!(json["count"], 0);
        assert_eq!(json["top"], serde_json::json!([]));
    }
}
