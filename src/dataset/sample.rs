//! Bundled sample snapshot.
//!
//! Illustrative data only; pass `--dataset` to use a real snapshot.

use super::record::{Dataset, Record};

const SAMPLE: &[(&str, f64)] = &[
    ("RENDER", 69.42),
    ("ICX", 65.82),
    ("VTHO", 63.52),
    ("BCH", 63.14),
    ("GTC", 59.85),
    ("XVG", 59.48),
    ("ETC", 59.33),
    ("ATA", 55.39),
    ("RIF", 51.12),
    ("GLM", 50.63),
    ("IOST", 50.49),
    ("SEI", 49.71),
    ("SC", 44.43),
    ("PUNDIX", 41.95),
    ("POLYX", 40.94),
    ("LIT", 38.22),
    ("PHA", 36.17),
    ("HIGH", 31.48),
    ("QKC", 31.38),
    ("MASK", 31.17),
    ("IOTX", 30.13),
    ("FIO", 24.21),
    ("KMD", 23.91),
    ("BAT", 17.94),
    ("EGLD", 16.04),
];

/// The 25-token sample snapshot
pub fn sample_dataset() -> Dataset {
    let records = SAMPLE
        .iter()
        .map(|(token, pl)| Record::new(*token, *pl))
        .collect();

    // SAMPLE is static and satisfies every invariant
    Dataset::new(records).unwrap_or_else(|e| unreachable!("bundled sample is invalid: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset_shape() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 25);
        assert_eq!(dataset.records()[0].token, "RENDER");
        assert_eq!(dataset.records()[24].token, "EGLD");
        assert_eq!(dataset.pl_bounds(), (16.04, 69.42));
    }
}
