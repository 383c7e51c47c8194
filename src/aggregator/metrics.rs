//! Descriptive statistics over the aggregate table.
//!
//! `analyze` computes every section of the analysis report from rows in
//! memory. Rendering lives in `output::report`.

use super::row_builder::MetricsRow;
use crate::utils::config::{DATE_FORMAT, RECENT_WINDOW_DAYS};
use chrono::{Duration, NaiveDate};
use log::{debug, warn};
use serde::Serialize;

/// Full analysis report
///
/// **Public** - returned from analyze
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisReport {
    pub totals: Totals,
    pub difficulty_distribution: Vec<CategoryCount>,
    pub pattern_distribution: Vec<CategoryCount>,
    pub company_distribution: Vec<CategoryCount>,
    pub pattern_mastery: Vec<PatternMastery>,
    pub time: TimeStats,
    pub recent: RecentActivity,
}

/// Row count plus time and attempt totals
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub problems: usize,
    pub total_time_min: f64,
    pub mean_time_min: f64,
    pub total_attempts: u64,
    pub mean_attempts: f64,
}

/// Number of rows sharing a column value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Share of a pattern's rows marked as mastered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternMastery {
    pub pattern: String,
    pub mastered: usize,
    pub total: usize,
    /// Percentage, 0-100
    pub rate: f64,
}

/// Extremes and median of `total_time_min`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeStats {
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// Problems solved within the window ending at the latest solved date
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecentActivity {
    /// Latest parseable solved date, `None` if there is none
    pub window_end: Option<NaiveDate>,
    pub window_start: Option<NaiveDate>,
    pub problems: Vec<RecentProblem>,
    /// Rows whose non-empty solved date could not be parsed
    pub skipped_dates: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentProblem {
    pub title: String,
    pub difficulty: String,
    pub solved_date: NaiveDate,
}

/// Compute the analysis report for a table
///
/// **Public** - main entry point for report statistics
///
/// # Arguments
/// * `rows` - Aggregate table rows, in table order
///
/// # Returns
/// Report with every section filled; an empty table gives zeroed sections
pub fn analyze(rows: &[MetricsRow]) -> AnalysisReport {
    debug!("Analyzing {} rows", rows.len());

    let pattern_distribution = count_values(rows.iter().map(|r| r.pattern.as_str()));
    let pattern_mastery = calculate_pattern_mastery(rows, &pattern_distribution);

    AnalysisReport {
        totals: calculate_totals(rows),
        difficulty_distribution: count_values(rows.iter().map(|r| r.difficulty_label())),
        pattern_distribution,
        company_distribution: count_values(rows.iter().map(|r| r.company_frequency.as_str())),
        pattern_mastery,
        time: calculate_time_stats(rows),
        recent: find_recent_activity(rows),
    }
}

/// Sum and mean of time and attempts
pub fn calculate_totals(rows: &[MetricsRow]) -> Totals {
    if rows.is_empty() {
        return Totals::default();
    }

    let count = rows.len();
    let total_time_min: f64 = rows.iter().map(|r| r.total_time_min).sum();
    let total_attempts: u64 = rows.iter().map(|r| r.attempts as u64).sum();

    Totals {
        problems: count,
        total_time_min,
        mean_time_min: total_time_min / count as f64,
        total_attempts,
        mean_attempts: total_attempts as f64 / count as f64,
    }
}

/// Count occurrences of each value
///
/// Blank values are not a category and are left out. Sorted by count,
/// descending. Ties keep the order in which values first appear.
pub fn count_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values.filter(|v| !v.trim().is_empty()) {
        match counts.iter_mut().find(|c| c.value == value) {
            Some(existing) => existing.count += 1,
            None => counts.push(CategoryCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }

    // Stable sort preserves first-appearance order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Mastery rate per pattern, in pattern-distribution order
pub fn calculate_pattern_mastery(
    rows: &[MetricsRow],
    pattern_distribution: &[CategoryCount],
) -> Vec<PatternMastery> {
    pattern_distribution
        .iter()
        .map(|entry| {
            let mastered = rows
                .iter()
                .filter(|r| r.pattern == entry.value && r.pattern_mastery)
                .count();

            let rate = if entry.count > 0 {
                (mastered as f64 / entry.count as f64) * 100.0
            } else {
                0.0
            };

            PatternMastery {
                pattern: entry.value.clone(),
                mastered,
                total: entry.count,
                rate,
            }
        })
        .collect()
}

/// Min, max and median of total time
pub fn calculate_time_stats(rows: &[MetricsRow]) -> TimeStats {
    let mut times: Vec<f64> = rows.iter().map(|r| r.total_time_min).collect();
    if times.is_empty() {
        return TimeStats::default();
    }

    // Values are validated finite at load time
    times.sort_by(|a, b| a.total_cmp(b));

    TimeStats {
        min: times[0],
        max: times[times.len() - 1],
        median: median_of_sorted(&times),
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Rows solved within `RECENT_WINDOW_DAYS` of the latest solved date
///
/// Empty solved dates mean unsolved and are ignored. Non-empty dates that do
/// not parse are logged, counted in `skipped_dates`, and kept out of both the
/// window and the choice of its end.
pub fn find_recent_activity(rows: &[MetricsRow]) -> RecentActivity {
    let mut skipped_dates = 0;
    let mut dated: Vec<(&MetricsRow, NaiveDate)> = Vec::new();

    for row in rows {
        let raw = row.solved_date.trim();
        if raw.is_empty() {
            continue;
        }

        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => dated.push((row, date)),
            Err(e) => {
                warn!("Ignoring unparsable solved_date {:?} for problem {} ({}): {}",
                      raw, row.problem_id, row.title, e);
                skipped_dates += 1;
            }
        }
    }

    let window_end = match dated.iter().map(|(_, date)| *date).max() {
        Some(end) => end,
        None => {
            return RecentActivity {
                skipped_dates,
                ..Default::default()
            }
        }
    };
    let window_start = window_end - Duration::days(RECENT_WINDOW_DAYS);

    let problems = dated
        .into_iter()
        .filter(|(_, date)| *date >= window_start)
        .map(|(row, date)| RecentProblem {
            title: row.title.clone(),
            difficulty: row.difficulty_label().to_string(),
            solved_date: date,
        })
        .collect();

    RecentActivity {
        window_end: Some(window_end),
        window_start: Some(window_start),
        problems,
        skipped_dates,
    }
}
