//! Filter parameters and checkbox selection state.

use crate::dataset::Dataset;
use std::collections::{BTreeMap, BTreeSet};

/// Canonical form of a user-typed symbol: trimmed, uppercase
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Parameters for one filter pass
///
/// **Public** - rebuilt by the caller on every interaction
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Inclusive lower bound on P/L%
    pub min_pl: f64,

    /// Inclusive upper bound on P/L%
    pub max_pl: f64,

    /// Tokens to keep. Empty means every token.
    pub selected_tokens: BTreeSet<String>,
}

impl FilterParams {
    /// Unbounded range, empty selection (i.e. everything passes)
    pub fn unbounded() -> Self {
        Self {
            min_pl: f64::NEG_INFINITY,
            max_pl: f64::INFINITY,
            selected_tokens: BTreeSet::new(),
        }
    }

    /// The dashboard's initial state: full dataset range, all tokens checked
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let (min_pl, max_pl) = dataset.pl_bounds();
        Self {
            min_pl,
            max_pl,
            selected_tokens: dataset.tokens().map(str::to_string).collect(),
        }
    }

    pub fn with_range(mut self, min_pl: f64, max_pl: f64) -> Self {
        self.min_pl = min_pl;
        self.max_pl = max_pl;
        self
    }

    pub fn with_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Bounds with NaN replaced by infinity and inverted ranges swapped
    ///
    /// Returns `(lo, hi, swapped)`.
    pub fn normalized_range(&self) -> (f64, f64, bool) {
        let lo = if self.min_pl.is_nan() { f64::NEG_INFINITY } else { self.min_pl };
        let hi = if self.max_pl.is_nan() { f64::INFINITY } else { self.max_pl };

        if lo > hi {
            (hi, lo, true)
        } else {
            (lo, hi, false)
        }
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Per-token checkbox state
///
/// Keyed by token symbol, iterated in dataset order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenSelection {
    order: Vec<String>,
    checked: BTreeMap<String, bool>,
}

impl TokenSelection {
    /// Every token of the dataset, all checked
    pub fn all_checked(dataset: &Dataset) -> Self {
        let order: Vec<String> = dataset.tokens().map(str::to_string).collect();
        let checked = order.iter().map(|t| (t.clone(), true)).collect();
        Self { order, checked }
    }

    /// Set one checkbox. Returns false for tokens not in the selection.
    pub fn set(&mut self, token: &str, value: bool) -> bool {
        match self.checked.get_mut(token) {
            Some(state) => {
                *state = value;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, token: &str) -> bool {
        match self.checked.get_mut(token) {
            Some(state) => {
                *state = !*state;
                true
            }
            None => false,
        }
    }

    /// Uncheck everything, then check only `tokens`
    pub fn check_only<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) {
        for state in self.checked.values_mut() {
            *state = false;
        }
        for token in tokens {
            self.set(token, true);
        }
    }

    pub fn is_checked(&self, token: &str) -> bool {
        self.checked.get(token).copied().unwrap_or(false)
    }

    /// Checked tokens, in dataset order
    pub fn checked_tokens(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|t| self.is_checked(t))
            .map(String::as_str)
    }

    pub fn to_selected_set(&self) -> BTreeSet<String> {
        self.checked_tokens().map(str::to_string).collect()
    }

    /// Raw `token -> checked` map
    pub fn as_map(&self) -> &BTreeMap<String, bool> {
        &self.checked
    }
}
