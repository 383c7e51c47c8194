//! Problem record parsing and schema definitions.
//!
//! This module handles:
//! - Defining the `metrics.yml` schema and its defaults
//! - Loading records from problem folders
//! - Validating value ranges at load time

pub mod record;
pub mod schema;

// Re-export main types
pub use record::{load_record, parse_record, read_record_file, validate_record};
pub use schema::{Complexity, Difficulty, ProblemRecord, Sprint};
