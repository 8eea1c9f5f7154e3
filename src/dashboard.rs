//! The filter-then-aggregate pipeline over an injected dataset.

use crate::aggregator::{aggregate_with, StatsSummary};
use crate::dataset::Dataset;
use crate::filter::{filter, FilterParams, FilteredView, TokenSelection};
use crate::utils::config::DEFAULT_TOP_N;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Result of one pipeline run: the chart rows plus their statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub view: FilteredView,
    pub stats: StatsSummary,
}

/// Holds the dataset and runs the pipeline on demand
///
/// **Public** - the entry point presentation code talks to
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    top_n: usize,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Change how many top/bottom performers are kept
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Full range, every token checked
    pub fn default_params(&self) -> FilterParams {
        FilterParams::for_dataset(&self.dataset)
    }

    /// Every token checked
    pub fn default_selection(&self) -> TokenSelection {
        TokenSelection::all_checked(&self.dataset)
    }

    /// Warn about selected tokens the dataset does not contain
    ///
    /// Returns how many were unknown. Such tokens match nothing.
    pub fn warn_unknown_tokens(&self, params: &FilterParams) -> usize {
        params
            .selected_tokens
            .iter()
            .filter(|token| !self.dataset.contains_token(token))
            .inspect(|token| warn!("Token {} is not in the dataset", token))
            .count()
    }

    /// Run filter then aggregate
    pub fn evaluate(&self, params: &FilterParams) -> Snapshot {
        let view = filter(&self.dataset, params);
        let stats = aggregate_with(&view, self.top_n);
        info!("Evaluated filters: {}", stats.summary());
        Snapshot { view, stats }
    }
}
