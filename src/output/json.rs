//! JSON report output writer and request reader.
//!
//! Writes Report structs to JSON files with proper formatting.

use super::schema::{QueryRequest, QueryResponse, Report};
use crate::utils::error::{OutputError, QueryError};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report data to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_output_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a query response as pretty JSON
///
/// **Public** - used by `query` for stdout and file output
pub fn response_to_string(response: &QueryResponse) -> Result<String, OutputError> {
    serde_json::to_string_pretty(response).map_err(OutputError::SerializationFailed)
}

/// Create missing parent directories of `path`
///
/// **Public (crate)** - shared with the SVG writer
pub(crate) fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

/// Validate that output path is writable
///
/// **Public (crate)** - shared with the SVG writer
pub(crate) fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<Report, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: Report = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} records",
        report.version, report.snapshot.stats.count
    );

    Ok(report)
}

/// Decode a filter request from any reader (file or stdin)
///
/// **Public** - used by the query command
pub fn read_request(mut reader: impl Read) -> Result<QueryRequest, QueryError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    if contents.trim().is_empty() {
        debug!("Empty request, using defaults");
        return Ok(QueryRequest::default());
    }

    Ok(serde_json::from_str(&contents)?)
}
