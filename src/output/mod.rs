//! Output writers and JSON schema.
//!
//! This module handles writing data to disk in various formats:
//! - JSON reports and query responses
//! - SVG bar charts

pub mod json;
pub mod schema;
pub mod svg;

// Re-export main functions
pub use json::{read_report, read_request, response_to_string, write_report};
pub use schema::{AppliedFilters, QueryRequest, QueryResponse, Report};
pub use svg::write_svg;
