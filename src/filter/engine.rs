//! The filter engine.
//!
//! A record passes iff `min_pl <= pl_percent <= max_pl` (inclusive) and its
//! token is selected. An empty selection selects every token. Output is
//! sorted ascending by P/L%, ties kept in dataset order.

use super::params::FilterParams;
use crate::dataset::{Dataset, Record};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Records that passed the filter, ascending by P/L%
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilteredView {
    records: Vec<Record>,
}

impl FilteredView {
    /// Wrap records, sorting them ascending (stable)
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by(|a, b| a.pl_percent.total_cmp(&b.pl_percent));
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a FilteredView {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Apply range and selection predicates to a dataset
///
/// **Public** - main entry point of the filter engine
///
/// # Arguments
/// * `dataset` - Records to filter
/// * `params` - Range and token selection
///
/// # Returns
/// Matching records, ascending by P/L%
pub fn filter(dataset: &Dataset, params: &FilterParams) -> FilteredView {
    let (lo, hi, swapped) = params.normalized_range();
    if swapped {
        warn!(
            "min_pl {} is above max_pl {}, swapping bounds",
            params.min_pl, params.max_pl
        );
    }

    let select_all = params.selected_tokens.is_empty();
    if select_all {
        debug!("No tokens selected, falling back to all {} tokens", dataset.len());
    }

    let matching: Vec<Record> = dataset
        .records()
        .iter()
        .filter(|r| lo <= r.pl_percent && r.pl_percent <= hi)
        .filter(|r| select_all || params.selected_tokens.contains(&r.token))
        .cloned()
        .collect();

    debug!(
        "Filter [{}, {}] kept {} of {} records",
        lo,
        hi,
        matching.len(),
        dataset.len()
    );

    FilteredView::from_records(matching)
}
