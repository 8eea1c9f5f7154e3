//! Query command implementation.
//!
//! Reads a JSON filter request, runs the pipeline and emits the JSON
//! response `{ "view": [...], "stats": {...} }`.

use super::models::QueryArgs;
use super::utils::load_or_sample;
use crate::dashboard::{Dashboard, Snapshot};
use crate::output::json::{create_parent_dirs, validate_output_path};
use crate::output::{read_request, response_to_string};
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io;

/// Execute the query command
///
/// **Public** - main entry point called from main.rs
pub fn execute_query(args: QueryArgs) -> Result<Snapshot> {
    let dataset = load_or_sample(args.dataset.as_deref())?;
    let dashboard = Dashboard::new(dataset);

    let request = match &args.request {
        Some(path) => {
            info!("Reading request from: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open request {}", path.display()))?;
            read_request(file)
        }
        None => {
            info!("Reading request from stdin");
            read_request(io::stdin().lock())
        }
    }
    .context("Failed to decode filter request")?;

    let params = request.to_params();
    dashboard.warn_unknown_tokens(&params);
    let snapshot = dashboard.evaluate(&params);
    let body = response_to_string(&snapshot).context("Failed to encode response")?;

    match &args.output {
        Some(path) => {
            validate_output_path(path)?;
            create_parent_dirs(path)?;
            std::fs::write(path, body)
                .with_context(|| format!("Failed to write response {}", path.display()))?;
            info!("✓ Response written to: {}", path.display());
        }
        None => println!("{}", body),
    }

    Ok(snapshot)
}
