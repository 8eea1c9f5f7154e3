//! Load a dataset snapshot from a TOML or JSON file.
//!
//! TOML layout:
//! ```toml
//! [[tokens]]
//! token = "RENDER"
//! pl_percent = 69.42
//! ```
//!
//! JSON layout: `{ "tokens": [{ "token": "RENDER", "pl_percent": 69.42 }] }`

use super::record::{Dataset, Record};
use crate::utils::error::DatasetError;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk dataset layout
#[derive(Debug, Deserialize)]
struct DatasetFile {
    tokens: Vec<Record>,
}

/// Load and validate a dataset file
///
/// **Public** - used by every command that accepts `--dataset`
///
/// The format is picked from the file extension.
///
/// # Errors
/// * `DatasetError::Io` - file cannot be read
/// * `DatasetError::Toml` / `DatasetError::Json` - malformed content
/// * `DatasetError::UnsupportedFormat` - unknown extension
/// * Any record validation error from `Dataset::new`
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    info!("Loading dataset from: {}", path.display());

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let contents = fs::read_to_string(path)?;
    let dataset = match extension.as_str() {
        "toml" => parse_dataset_toml(&contents)?,
        "json" => parse_dataset_json(&contents)?,
        _ => return Err(DatasetError::UnsupportedFormat(path.display().to_string())),
    };

    debug!("Loaded {} records", dataset.len());
    Ok(dataset)
}

pub fn parse_dataset_toml(contents: &str) -> Result<Dataset, DatasetError> {
    let file: DatasetFile = toml::from_str(contents)?;
    Dataset::new(file.tokens)
}

pub fn parse_dataset_json(contents: &str) -> Result<Dataset, DatasetError> {
    let file: DatasetFile = serde_json::from_str(contents)?;
    Dataset::new(file.tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_toml() {
        let dataset = parse_dataset_toml(
            r#"
[[tokens]]
token = "AAA"
pl_percent = 10.5

[[tokens]]
token = "BBB"
pl_percent = -3.0
"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1], Record::new("BBB", -3.0));
    }

    #[test]
    fn test_parse_json() {
        let dataset =
            parse_dataset_json(r#"{"tokens": [{"token": "AAA", "pl_percent": 1}]}"#).unwrap();
        assert_eq!(dataset.records()[0].pl_percent, 1.0);
    }

    #[test]
    fn test_parse_toml_validates_records() {
        let result = parse_dataset_toml("tokens = []");
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_load_dataset_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[[tokens]]\ntoken = \"XYZ\"\npl_percent = 42.0").unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.records()[0].token, "XYZ");
    }

    #[test]
    fn test_load_dataset_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let result = load_dataset(file.path());
        assert!(matches!(result, Err(DatasetError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let result = load_dataset("does/not/exist.toml");
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
