use anyhow::{Context, Result};
use std::path::Path;
use crate::parser::{read_record_file, ProblemRecord};
use crate::utils::config::METRICS_FILE_NAME;

/// Validate a metrics file, or the metrics file inside a problem folder
pub fn validate_record_path(path: &Path) -> Result<ProblemRecord> {
    let metrics_path = if path.is_dir() {
        path.join(METRICS_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    println!("Validating record: {}", metrics_path.display());

    let record = read_record_file(&metrics_path)
        .with_context(|| format!("Invalid record {}", metrics_path.display()))?;

    println!("✓ Valid metrics record");
    println!("  Problem: #{} {}", record.problem_id, record.title);
    println!("  Difficulty: {}", record.difficulty.map(|d| d.as_str()).unwrap_or("-"));
    println!("  Pattern: {}", record.pattern);
    println!("  Attempts: {}", record.attempts);
    println!("  Sprints: {}", record.sprints.len());
    println!("  Solved: {}", if record.solved_date.is_empty() { "no" } else { record.solved_date.as_str() });

    Ok(record)
}

/// Display version information
pub fn display_version() {
    println!("Study Tracker v{}", env!("CARGO_PKG_VERSION"));
    println!("Record file: {}", METRICS_FILE_NAME);
    println!();
    println!("Scaffolds practice problems and exports their metrics.");
}
