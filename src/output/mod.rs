//! Output writers for the aggregate table and analysis report.
//!
//! This module handles writing data in various formats:
//! - CSV aggregate table
//! - Text and JSON analysis reports

pub mod csv;
pub mod report;

// Re-export main functions
pub use csv::{table_to_string, validate_path, write_table};
pub use report::{render_report, report_to_json};
