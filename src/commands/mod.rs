//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod models;
pub mod new;
pub mod utils;

// Re-export main command functions
pub use export::{execute_export, export_metrics, load_problem_records, ExportOutcome};
pub use models::{ExportArgs, NewArgs};
pub use new::{execute_new, validate_args};
pub use utils::{display_version, validate_record_path};
