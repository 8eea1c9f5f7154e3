//! Record and dataset types.

use crate::utils::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One token and its profit/loss percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Uppercase token symbol (e.g. "RENDER")
    pub token: String,

    /// Profit/loss percentage, unbounded
    pub pl_percent: f64,
}

impl Record {
    pub fn new(token: impl Into<String>, pl_percent: f64) -> Self {
        Self {
            token: token.into(),
            pl_percent,
        }
    }
}

/// Validated, ordered, read-only collection of records
///
/// **Public** - injected into the filter engine and dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, checking every record invariant
    ///
    /// # Errors
    /// * `DatasetError::Empty` - no records at all
    /// * `DatasetError::EmptyToken` / `LowercaseToken` / `DuplicateToken` - bad symbol
    /// * `DatasetError::NonFinitePercent` - NaN or infinite P/L%
    pub fn new(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        validate_records(&records)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    // Never empty: `new` rejects an empty record list
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Token symbols in dataset order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.token.as_str())
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.records.iter().any(|r| r.token == token)
    }

    /// Lowest and highest P/L% in the dataset
    ///
    /// This is the default filter range.
    pub fn pl_bounds(&self) -> (f64, f64) {
        self.records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.pl_percent), hi.max(r.pl_percent)),
        )
    }
}

/// Check symbol and percent invariants for every record
///
/// **Private** - internal helper for Dataset::new
fn validate_records(records: &[Record]) -> Result<(), DatasetError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.token.trim().is_empty() {
            return Err(DatasetError::EmptyToken { index });
        }
        if record.token.chars().any(char::is_lowercase) {
            return Err(DatasetError::LowercaseToken(record.token.clone()));
        }
        if !seen.insert(record.token.as_str()) {
            return Err(DatasetError::DuplicateToken(record.token.clone()));
        }
        if !record.pl_percent.is_finite() {
            return Err(DatasetError::NonFinitePercent {
                token: record.token.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_records() {
        let dataset = Dataset::new(vec![Record::new("AAA", 1.5), Record::new("BBB", -2.0)]).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.tokens().collect::<Vec<_>>(), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Dataset::new(vec![]), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_new_rejects_blank_token() {
        let result = Dataset::new(vec![Record::new("AAA", 1.0), Record::new("  ", 2.0)]);
        assert!(matches!(result, Err(DatasetError::EmptyToken { index: 1 })));
    }

    #[test]
    fn test_new_rejects_lowercase_token() {
        let result = Dataset::new(vec![Record::new("render", 1.0)]);
        assert!(matches!(result, Err(DatasetError::LowercaseToken(_))));
    }

    #[test]
    fn test_new_rejects_duplicate_token() {
        let result = Dataset::new(vec![Record::new("AAA", 1.0), Record::new("AAA", 2.0)]);
        assert!(matches!(result, Err(DatasetError::DuplicateToken(t)) if t == "AAA"));
    }

    #[test]
    fn test_new_rejects_nan() {
        let result = Dataset::new(vec![Record::new("AAA", f64::NAN)]);
        assert!(matches!(result, Err(DatasetError::NonFinitePercent { .. })));
    }

    #[test]
    fn test_pl_bounds() {
        let dataset = Dataset::new(vec![
            Record::new("AAA", 12.0),
            Record::new("BBB", -4.5),
            Record::new("CCC", 30.25),
        ])
        .unwrap();
        assert_eq!(dataset.pl_bounds(), (-4.5, 30.25));
    }
}
