//! JSON schema definitions for requests, responses and report files.
//!
//! Report files are versioned to allow future evolution.

use crate::dashboard::Snapshot;
use crate::filter::{normalize_token, FilterParams};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Filter request accepted by `query`
///
/// Omitted bounds are unbounded, omitted `tokens` selects everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub min_pl: Option<f64>,

    #[serde(default)]
    pub max_pl: Option<f64>,

    #[serde(default)]
    pub tokens: Option<Vec<String>>,
}

impl QueryRequest {
    /// Filter parameters for this request
    ///
    /// Tokens are normalized the same way the CLI normalizes `--tokens`;
    /// blank entries are dropped.
    pub fn to_params(&self) -> FilterParams {
        FilterParams::unbounded()
            .with_range(
                self.min_pl.unwrap_or(f64::NEG_INFINITY),
                self.max_pl.unwrap_or(f64::INFINITY),
            )
            .with_tokens(
                self.tokens
                    .iter()
                    .flatten()
                    .map(|t| normalize_token(t))
                    .filter(|t| !t.is_empty()),
            )
    }
}

/// Response returned by `query`: `{ "view": [...], "stats": {...} }`
pub type QueryResponse = Snapshot;

/// Filters as written into a report (`null` = unbounded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub min_pl: Option<f64>,
    pub max_pl: Option<f64>,

    /// Selected tokens; empty means all
    pub tokens: Vec<String>,
}

impl From<&FilterParams> for AppliedFilters {
    fn from(params: &FilterParams) -> Self {
        let (lo, hi, _) = params.normalized_range();
        Self {
            min_pl: lo.is_finite().then_some(lo),
            max_pl: hi.is_finite().then_some(hi),
            tokens: params.selected_tokens.iter().cloned().collect(),
        }
    }
}

/// Top-level report written by `show --json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Number of records in the source dataset
    pub dataset_size: usize,

    pub filters: AppliedFilters,

    #[serde(flatten)]
    pub snapshot: Snapshot,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl Report {
    pub fn new(dataset_size: usize, params: &FilterParams, snapshot: Snapshot) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            dataset_size,
            filters: AppliedFilters::from(params),
            snapshot,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_are_unbounded() {
        let request: QueryRequest = serde_json::from_str("{}").unwrap();
        let params = request.to_params();
        assert_eq!(params.min_pl, f64::NEG_INFINITY);
        assert_eq!(params.max_pl, f64::INFINITY);
        assert!(params.selected_tokens.is_empty());
    }

    #[test]
    fn test_request_to_params() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"min_pl": 1.5, "max_pl": 9, "tokens": ["A", "B"]}"#).unwrap();
        let params = request.to_params();
        assert_eq!(params.min_pl, 1.5);
        assert_eq!(params.max_pl, 9.0);
        assert_eq!(params.selected_tokens.len(), 2);
    }

    #[test]
    fn test_request_tokens_are_normalized() {
        let request: QueryRequest =
            serde_json::from_str(r#"{"tokens": ["render", " icx ", "  "]}"#).unwrap();
        let params = request.to_params();
        let tokens: Vec<&str> = params.selected_tokens.iter().map(String::as_str).collect();
        assert_eq!(tokens, vec!["ICX", "RENDER"]);
    }

    #[test]
    fn test_applied_filters_drop_infinite_bounds() {
        let filters = AppliedFilters::from(&FilterParams::unbounded().with_range(f64::NEG_INFINITY, 4.0));
        assert_eq!(filters.min_pl, None);
        assert_eq!(filters.max_pl, Some(4.0));
    }
}
