//! Top-N and bottom-N performer rankings.
//!
//! Ties are broken by position in the input, which for a filtered view is
//! dataset order (the view is built with a stable sort).

use crate::dataset::Record;
use log::debug;

/// The `n` records with the largest P/L%, descending
///
/// Returns every record when fewer than `n` exist.
pub fn top_n(records: &[Record], n: usize) -> Vec<Record> {
    debug!("Ranking top {} of {} records", n, records.len());

    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| b.pl_percent.total_cmp(&a.pl_percent));
    ranked.into_iter().take(n).cloned().collect()
}

/// The `n` records with the smallest P/L%, ascending
pub fn bottom_n(records: &[Record], n: usize) -> Vec<Record> {
    debug!("Ranking bottom {} of {} records", n, records.len());

    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| a.pl_percent.total_cmp(&b.pl_percent));
    ranked.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("A", 3.0),
            Record::new("B", 7.0),
            Record::new("C", 3.0),
            Record::new("D", -1.0),
        ]
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.token.as_str()).collect()
    }

    #[test]
    fn test_top_n_descending_with_stable_ties() {
        assert_eq!(names(&top_n(&records(), 3)), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_bottom_n_ascending_with_stable_ties() {
        assert_eq!(names(&bottom_n(&records(), 3)), vec!["D", "A", "C"]);
    }

    #[test]
    fn test_n_larger_than_input() {
        assert_eq!(top_n(&records(), 10).len(), 4);
        assert_eq!(bottom_n(&records(), 10).len(), 4);
    }

    #[test]
    fn test_zero_and_empty() {
        assert!(top_n(&records(), 0).is_empty());
        assert!(bottom_n(&[], 5).is_empty());
    }
}
