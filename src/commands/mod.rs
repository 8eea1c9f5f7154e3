//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod query;
pub mod show;
pub mod utils;

// Re-export main command functions
pub use models::{QueryArgs, ShowArgs};
pub use query::execute_query;
pub use show::{execute_show, validate_args};
pub use utils::{display_schema, display_version, load_or_sample, validate_dataset_file};
