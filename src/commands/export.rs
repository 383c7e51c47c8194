//! Export command implementation.
//!
//! The export command:
//! 1. Scans the problems directory for problem folders
//! 2. Loads each folder's metrics record, skipping bad ones
//! 3. Projects records into table rows
//! 4. Writes the CSV table
//! 5. Optionally prints the analysis report

use super::models::ExportArgs;
use crate::aggregator::{analyze, build_rows, MetricsRow};
use crate::output::{render_report, report_to_json, validate_path, write_table};
use crate::parser::{load_record, ProblemRecord};
use crate::utils::error::ExportError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of an export run
#[derive(Debug, Clone)]
pub enum ExportOutcome {
    /// No folder held a loadable record; nothing was written
    NoMetrics,

    /// Table written with one row per loaded record
    Exported { rows: Vec<MetricsRow>, path: PathBuf },
}

impl ExportOutcome {
    pub fn row_count(&self) -> usize {
        match self {
            ExportOutcome::NoMetrics => 0,
            ExportOutcome::Exported { rows, .. } => rows.len(),
        }
    }
}

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Problems directory missing or unreadable
/// * CSV write errors
pub fn execute_export(args: ExportArgs) -> Result<ExportOutcome> {
    let start_time = Instant::now();

    info!("Exporting metrics from: {}", args.problems_dir.display());

    let outcome = export_metrics(&args.problems_dir, &args.output)
        .context("Failed to export metrics")?;

    match &outcome {
        ExportOutcome::NoMetrics => {
            println!("No metrics found");
        }
        ExportOutcome::Exported { rows, path } => {
            println!("Exported {} problems to {}", rows.len(), path.display());

            if args.analyze {
                let report = analyze(rows);
                if args.json {
                    println!("{}", report_to_json(&report)?);
                } else {
                    println!("{}", render_report(&report));
                }
            }
        }
    }

    if args.analyze && matches!(outcome, ExportOutcome::NoMetrics) {
        info!("Skipping analysis: nothing was exported");
    }

    info!("Export completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(outcome)
}

/// Export every problem record under `problems_dir` to a CSV table
///
/// **Public** - library entry point, no console output
///
/// # Arguments
/// * `problems_dir` - Directory of problem folders
/// * `output` - CSV path, overwritten when at least one record loads
///
/// # Returns
/// `ExportOutcome::NoMetrics` without touching `output` if nothing loaded
///
/// # Errors
/// * `ExportError::ProblemsDirMissing` - Directory does not exist
/// * `ExportError::ScanFailed` - Directory could not be listed
/// * `ExportError::Output` - Output path invalid or not writable
pub fn export_metrics(
    problems_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ExportOutcome, ExportError> {
    let output = output.as_ref();

    validate_path(output)?;

    let records = load_problem_records(problems_dir)?;
    if records.is_empty() {
        return Ok(ExportOutcome::NoMetrics);
    }

    let rows = build_rows(&records);
    write_table(&rows, output)?;

    Ok(ExportOutcome::Exported {
        rows,
        path: output.to_path_buf(),
    })
}

/// Load every record under `problems_dir`, in folder-name order
///
/// **Public** - folders without a metrics file are skipped; folders whose
/// record fails to load are logged and skipped
pub fn load_problem_records(problems_dir: impl AsRef<Path>) -> Result<Vec<ProblemRecord>, ExportError> {
    let problems_dir = problems_dir.as_ref();

    if !problems_dir.exists() {
        return Err(ExportError::ProblemsDirMissing(problems_dir.to_path_buf()));
    }

    let mut folders: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(problems_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            folders.push(path);
        }
    }
    folders.sort();

    debug!("Found {} candidate folders", folders.len());

    let mut records = Vec::new();
    for folder in &folders {
        match load_record(folder) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => warn!("Error processing {}: {}", folder.display(), e),
        }
    }

    info!("Loaded {} of {} folders", records.len(), folders.len());

    Ok(records)
}
