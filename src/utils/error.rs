//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while building or loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset contains no records")]
    Empty,

    #[error("Record {index} has an empty token symbol")]
    EmptyToken { index: usize },

    #[error("Token symbol must be uppercase: {0}")]
    LowercaseToken(String),

    #[error("Duplicate token symbol: {0}")]
    DuplicateToken(String),

    #[error("P/L% for {token} is not a finite number")]
    NonFinitePercent { token: String },

    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML dataset: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported dataset format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Errors that can occur while decoding a filter request
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid request JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to read request: {0}")]
    ReadFailed(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
