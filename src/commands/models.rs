use std::path::PathBuf;
use crate::utils::config::{DEFAULT_OUTPUT_FILE, DEFAULT_PROBLEMS_DIR};

/// Arguments for the new command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct NewArgs {
    /// LeetCode problem ID
    pub problem_id: u32,

    /// Problem title
    pub title: String,

    /// Difficulty label, validated before any file is touched
    pub difficulty: String,

    /// Primary algorithmic pattern
    pub pattern: String,

    pub tags: Vec<String>,

    /// Directory holding problem folders
    pub problems_dir: PathBuf,

    /// Overwrite an existing problem folder
    pub force: bool,
}

impl Default for NewArgs {
    fn default() -> Self {
        Self {
            problem_id: 0,
            title: String::new(),
            difficulty: String::new(),
            pattern: String::new(),
            tags: Vec::new(),
            problems_dir: PathBuf::from(DEFAULT_PROBLEMS_DIR),
            force: false,
        }
    }
}

/// Arguments for the export command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Directory holding problem folders
    pub problems_dir: PathBuf,

    /// Output path for the CSV table
    pub output: PathBuf,

    /// Print the analysis report after exporting
    pub analyze: bool,

    /// Print the report as JSON instead of text
    pub json: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            problems_dir: PathBuf::from(DEFAULT_PROBLEMS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            analyze: false,
            json: false,
        }
    }
}
