use crate::dataset::{load_dataset, sample_dataset, Dataset};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

/// Load `path`, or fall back to the bundled sample
pub fn load_or_sample(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => load_dataset(path)
            .with_context(|| format!("Failed to load dataset {}", path.display())),
        None => {
            info!("No dataset given, using bundled sample");
            Ok(sample_dataset())
        }
    }
}

/// Validate a dataset file
pub fn validate_dataset_file(file_path: PathBuf) -> Result<()> {
    println!("Validating dataset: {}", file_path.display());

    let dataset = load_dataset(&file_path)
        .with_context(|| format!("Invalid dataset {}", file_path.display()))?;
    let (min, max) = dataset.pl_bounds();

    println!("✓ Valid dataset");
    println!("  Records: {}", dataset.len());
    println!("  P/L% range: {:.2}% .. {:.2}%", min, max);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Token Dash Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  dataset_size: number     - Records in the source dataset");
        println!("  filters: object          - Filters that produced this report");
        println!("    min_pl: number?        - Lower bound (null = unbounded)");
        println!("    max_pl: number?        - Upper bound (null = unbounded)");
        println!("    tokens: array          - Selected tokens (empty = all)");
        println!("  view: array              - Matching records, ascending by P/L%");
        println!("    token: string          - Token symbol");
        println!("    pl_percent: number     - Profit/loss percentage");
        println!("  stats: object            - Statistics over view");
        println!("    mean/median/min/max    - number, null when view is empty");
        println!("    count: number          - Records in view");
        println!("    top: array             - Best performers, descending");
        println!("    bottom: array          - Worst performers, ascending");
        println!("  generated_at: string     - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Token Dash v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Filter, rank and chart token profit/loss snapshots.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_sample_defaults_to_sample() {
        assert_eq!(load_or_sample(None).unwrap().len(), 25);
    }

    #[test]
    fn test_load_or_sample_missing_file() {
        assert!(load_or_sample(Some(Path::new("missing.toml"))).is_err());
    }
}
