//! Text and JSON rendering of the analysis report.

use crate::aggregator::{AnalysisReport, CategoryCount};
use crate::utils::config::RECENT_WINDOW_DAYS;
use crate::utils::error::OutputError;
use crate::utils::format::format_number;
use std::fmt::Write;

/// Render the report as plain text
///
/// **Public** - printed by `export --analyze`
///
/// Sections, in order: totals, difficulty, pattern and company frequency
/// distributions, pattern mastery, time analysis, recent activity.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    let totals = &report.totals;

    writeln!(out, "=== Problem Solving Analysis Report ===")?;
    writeln!(out)?;
    writeln!(out, "Total Problems Solved: {}", totals.problems)?;
    writeln!(out, "Total Time Spent: {} minutes", format_number(totals.total_time_min))?;
    writeln!(out, "Average Time per Problem: {:.1} minutes", totals.mean_time_min)?;
    writeln!(out, "Total Attempts: {}", totals.total_attempts)?;
    writeln!(out, "Average Attempts per Problem: {:.1}", totals.mean_attempts)?;
    writeln!(out)?;

    write_distribution(out, "Difficulty Distribution", &report.difficulty_distribution)?;
    write_distribution(out, "Pattern Distribution", &report.pattern_distribution)?;
    write_distribution(out, "Company Frequency Distribution", &report.company_distribution)?;

    writeln!(out, "=== Pattern Mastery ===")?;
    for entry in &report.pattern_mastery {
        writeln!(out, "{}: {}/{} ({:.1}%)", entry.pattern, entry.mastered, entry.total, entry.rate)?;
    }
    writeln!(out)?;

    writeln!(out, "=== Time Analysis ===")?;
    writeln!(out, "Fastest solve: {} minutes", format_number(report.time.min))?;
    writeln!(out, "Slowest solve: {} minutes", format_number(report.time.max))?;
    writeln!(out, "Median time: {:.1} minutes", report.time.median)?;
    writeln!(out)?;

    let recent = &report.recent;
    writeln!(out, "=== Recent Activity ===")?;
    writeln!(out, "Problems solved in last {} days: {}", RECENT_WINDOW_DAYS, recent.problems.len())?;

    if !recent.problems.is_empty() {
        writeln!(out, "Recent problems:")?;
        for problem in &recent.problems {
            writeln!(out, "  - {} ({})", problem.title, problem.difficulty)?;
        }
    }

    if recent.skipped_dates > 0 {
        writeln!(out, "Skipped {} unparsable solved date(s)", recent.skipped_dates)?;
    }

    Ok(())
}

fn write_distribution(out: &mut String, heading: &str, counts: &[CategoryCount]) -> std::fmt::Result {
    writeln!(out, "=== {} ===", heading)?;
    for entry in counts {
        writeln!(out, "{}: {} problems", entry.value, entry.count)?;
    }
    writeln!(out)
}

/// Serialize the report as pretty JSON
///
/// **Public** - printed by `export --analyze --json`
pub fn report_to_json(report: &AnalysisReport) -> Result<String, OutputError> {
    serde_json::to_string_pretty(report)
        .map_err(OutputError::SerializationFailed)
}
