//! Utility modules for configuration, error handling, and number formatting.

pub mod error;
pub mod config;
pub mod format;

// Re-export commonly used error types for convenience
pub use error::{RecordError, ScaffoldError, OutputError, ExportError};
pub use format::format_number;
