//! CSV writer for the aggregate table.
//!
//! Writes a header row followed by one row per `MetricsRow`, comma
//! separated, UTF-8, CRLF line endings. Cells are quoted only when they
//! need to be.

use crate::aggregator::MetricsRow;
use crate::utils::config::CSV_COLUMNS;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the aggregate table to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Arguments
/// * `rows` - Table rows in output order
/// * `output_path` - Path to output CSV file (overwritten)
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let rows = build_rows(&records);
/// write_table(&rows, "metrics.csv")?;
/// ```
pub fn write_table(rows: &[MetricsRow], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} rows to: {}", rows.len(), output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                )))?;
        }
    }

    let file = File::create(output_path)
        .map_err(OutputError::WriteFailed)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(table_to_string(rows).as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Render the table as CSV text, header included
///
/// **Public** - useful for tests and in-memory use
pub fn table_to_string(rows: &[MetricsRow]) -> String {
    let mut out = String::new();

    push_record(&mut out, CSV_COLUMNS.iter().copied());
    for row in rows {
        let fields = row.fields();
        push_record(&mut out, fields.iter().map(String::as_str));
    }

    out
}

fn push_record<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(cell));
    }
    out.push_str("\r\n");
}

/// Quote a cell if it contains a delimiter, quote or line break
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Validate that output path is writable
///
/// **Public** - used by the export command before scanning
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ProblemRecord;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape_field("Two Sum"), "Two Sum");
    }

    #[test]
    fn test_escape_comma_and_quotes() {
        assert_eq!(escape_field("Pow(x, n)"), "\"Pow(x, n)\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_header_only_for_no_rows() {
        let text = table_to_string(&[]);
        assert_eq!(text, format!("{}\r\n", CSV_COLUMNS.join(",")));
    }

    #[test]
    fn test_rows_end_with_crlf() {
        let row = MetricsRow::from_record(&ProblemRecord::default());
        let text = table_to_string(&[row]);

        assert_eq!(text.matches("\r\n").count(), 2);
        assert!(text.ends_with(",,\r\n"));
    }

    #[test]
    fn test_row_is_quoted() {
        let row = MetricsRow::from_record(&ProblemRecord {
            problem_id: 50,
            title: "Pow(x, n)".to_string(),
            ..Default::default()
        });

        let text = table_to_string(&[row]);
        let line = text.lines().nth(1).unwrap();

        assert!(line.starts_with("50,\"Pow(x, n)\","));
    }

    #[test]
    fn test_validate_path_empty() {
        assert!(validate_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
    }
}
