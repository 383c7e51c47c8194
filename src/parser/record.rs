//! Loads and validates a problem folder's `metrics.yml`.
//!
//! Validation happens once here, so everything downstream of the loader can
//! trust the typed record without re-checking or re-defaulting fields.

use super::schema::ProblemRecord;
use crate::utils::config::{MAX_DIFFICULTY_RATING, METRICS_FILE_NAME};
use crate::utils::error::RecordError;
use log::debug;
use std::path::Path;

/// Load the record stored in a problem folder
///
/// **Public** - main entry point for record loading
///
/// # Arguments
/// * `problem_dir` - Candidate problem folder
///
/// # Returns
/// `Ok(None)` if the folder has no metrics file (not a record),
/// `Ok(Some(record))` if it loaded and validated
///
/// # Errors
/// * `RecordError::ReadFailed` - File exists but could not be read
/// * `RecordError::YamlError` - Not valid YAML or wrong field types
/// * `RecordError::Empty` - File has no content
/// * `RecordError::Invalid` - Values outside their allowed range
pub fn load_record(problem_dir: impl AsRef<Path>) -> Result<Option<ProblemRecord>, RecordError> {
    let metrics_path = problem_dir.as_ref().join(METRICS_FILE_NAME);

    if !metrics_path.is_file() {
        debug!("No {} in {}, skipping", METRICS_FILE_NAME, problem_dir.as_ref().display());
        return Ok(None);
    }

    read_record_file(&metrics_path).map(Some)
}

/// Read and validate a metrics file at an explicit path
///
/// **Public** - used by the validate command
pub fn read_record_file(metrics_path: impl AsRef<Path>) -> Result<ProblemRecord, RecordError> {
    let metrics_path = metrics_path.as_ref();

    debug!("Reading record from: {}", metrics_path.display());

    let content = std::fs::read_to_string(metrics_path)?;
    parse_record(&content)
}

/// Parse and validate record YAML
///
/// **Public** - useful for tests and in-memory use
pub fn parse_record(content: &str) -> Result<ProblemRecord, RecordError> {
    if content.trim().is_empty() {
        return Err(RecordError::Empty);
    }

    let record: ProblemRecord = serde_yaml::from_str(content)?;
    validate_record(&record)?;

    debug!("Record loaded: #{} {} ({} sprints)",
           record.problem_id,
           record.title,
           record.sprints.len());

    Ok(record)
}

/// Check value ranges the type system cannot express
///
/// **Public** - can be called on records built in code
pub fn validate_record(record: &ProblemRecord) -> Result<(), RecordError> {
    if !record.total_time_min.is_finite() || record.total_time_min < 0.0 {
        return Err(RecordError::Invalid(format!(
            "total_time_min must be a non-negative number, got {}",
            record.total_time_min
        )));
    }

    if record.difficulty_rating > MAX_DIFFICULTY_RATING {
        return Err(RecordError::Invalid(format!(
            "difficulty_rating must be between 0 and {}, got {}",
            MAX_DIFFICULTY_RATING, record.difficulty_rating
        )));
    }

    for (i, sprint) in record.sprints.iter().enumerate() {
        if !sprint.duration_min.is_finite() || sprint.duration_min < 0.0 {
            return Err(RecordError::Invalid(format!(
                "sprint {} has invalid duration_min {}",
                i + 1,
                sprint.duration_min
            )));
        }
    }

    Ok(())
}
