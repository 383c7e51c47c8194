//! Project problem records into aggregate table rows.
//!
//! A row carries the raw record columns plus the fields derived from the
//! sprint log. `MetricsRow::fields` flattens it into the fixed column order
//! of `CSV_COLUMNS`.

use crate::parser::{Difficulty, ProblemRecord, Sprint};
use crate::utils::config::CSV_COLUMN_COUNT;
use crate::utils::format::format_number;
use serde::Serialize;

/// Statistics derived from a record's sprint log
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SprintStats {
    pub total_sprints: usize,

    /// Mean sprint duration in minutes.
    ///
    /// Defined as 0 for an empty sprint log. This is a reporting policy so
    /// unpractised problems still produce a row, not a mathematical mean.
    pub avg_sprint_time: f64,

    /// Date of the first sprint in log order, empty if none
    pub first_sprint_date: String,

    /// Date of the last sprint in log order, empty if none
    pub last_sprint_date: String,
}

impl SprintStats {
    /// Summarise a sprint log
    ///
    /// The log is trusted to be chronological; it is never re-sorted.
    pub fn from_sprints(sprints: &[Sprint]) -> Self {
        let (first, last) = match (sprints.first(), sprints.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Self::default(),
        };

        let total: f64 = sprints.iter().map(|s| s.duration_min).sum();

        Self {
            total_sprints: sprints.len(),
            avg_sprint_time: total / sprints.len() as f64,
            first_sprint_date: first.date.clone(),
            last_sprint_date: last.date.clone(),
        }
    }
}

/// One row of the aggregate table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    pub problem_id: u32,
    pub title: String,
    pub leetcode_url: String,
    pub difficulty: Option<Difficulty>,
    pub pattern: String,
    pub company_frequency: String,
    pub attempts: u32,
    pub total_time_min: f64,
    pub solved_date: String,
    pub pattern_mastery: bool,
    pub difficulty_rating: u8,
    pub sprints: SprintStats,
    pub time_complexity: String,
    pub space_complexity: String,
}

impl MetricsRow {
    /// Project a record into a table row
    ///
    /// **Public** - the only record-to-row conversion; pure, no I/O
    pub fn from_record(record: &ProblemRecord) -> Self {
        Self {
            problem_id: record.problem_id,
            title: record.title.clone(),
            leetcode_url: record.leetcode_url.clone(),
            difficulty: record.difficulty,
            pattern: record.pattern.clone(),
            company_frequency: record.company_frequency.clone(),
            attempts: record.attempts,
            total_time_min: record.total_time_min,
            solved_date: record.solved_date.clone(),
            pattern_mastery: record.pattern_mastery,
            difficulty_rating: record.difficulty_rating,
            sprints: SprintStats::from_sprints(&record.sprints),
            time_complexity: record.complexity.time.clone(),
            space_complexity: record.complexity.space.clone(),
        }
    }

    /// Difficulty label, empty when unset
    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.map(|d| d.as_str()).unwrap_or("")
    }

    /// Flatten into cell values in `CSV_COLUMNS` order
    pub fn fields(&self) -> [String; CSV_COLUMN_COUNT] {
        [
            self.problem_id.to_string(),
            self.title.clone(),
            self.leetcode_url.clone(),
            self.difficulty_label().to_string(),
            self.pattern.clone(),
            self.company_frequency.clone(),
            self.attempts.to_string(),
            format_number(self.total_time_min),
            self.solved_date.clone(),
            self.pattern_mastery.to_string(),
            self.difficulty_rating.to_string(),
            self.sprints.total_sprints.to_string(),
            format_number(self.sprints.avg_sprint_time),
            self.sprints.first_sprint_date.clone(),
            self.sprints.last_sprint_date.clone(),
            self.time_complexity.clone(),
            self.space_complexity.clone(),
        ]
    }
}

/// Build table rows from loaded records, preserving their order
pub fn build_rows(records: &[ProblemRecord]) -> Vec<MetricsRow> {
    records.iter().map(MetricsRow::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Complexity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sprint_stats_empty() {
        let stats = SprintStats::from_sprints(&[]);

        assert_eq!(stats.total_sprints, 0);
        assert_eq!(stats.avg_sprint_time, 0.0);
        assert_eq!(stats.first_sprint_date, "");
        assert_eq!(stats.last_sprint_date, "");
    }

    #[test]
    fn test_sprint_stats_mean() {
        let sprints = vec![
            Sprint::new("2024-01-01", 10.0),
            Sprint::new("2024-01-02", 20.0),
            Sprint::new("2024-01-03", 30.0),
        ];

        let stats = SprintStats::from_sprints(&sprints);

        assert_eq!(stats.total_sprints, 3);
        assert_eq!(stats.avg_sprint_time, 20.0);
    }

    #[test]
    fn test_sprint_stats_keeps_log_order() {
        // Out-of-order dates are reported as written
        let sprints = vec![
            Sprint::new("2024-03-05", 15.0),
            Sprint::new("2024-01-01", 15.0),
        ];

        let stats = SprintStats::from_sprints(&sprints);

        assert_eq!(stats.first_sprint_date, "2024-03-05");
        assert_eq!(stats.last_sprint_date, "2024-01-01");
    }

    #[test]
    fn test_row_fields_order() {
        let record = ProblemRecord {
            problem_id: 1,
            title: "Two Sum".to_string(),
            leetcode_url: "https://leetcode.com/problems/two-sum/".to_string(),
            difficulty: Some(Difficulty::Easy),
            pattern: "Hash Map".to_string(),
            company_frequency: "High".to_string(),
            attempts: 2,
            total_time_min: 45.0,
            solved_date: "2024-01-15".to_string(),
            pattern_mastery: true,
            difficulty_rating: 2,
            sprints: vec![
                Sprint::new("2024-01-14", 25.0),
                Sprint::new("2024-01-15", 20.0),
            ],
            complexity: Complexity {
                time: "O(n)".to_string(),
                space: "O(n)".to_string(),
                explanation: "single pass".to_string(),
            },
            ..Default::default()
        };

        let row = MetricsRow::from_record(&record);

        assert_eq!(
            row.fields().to_vec(),
            vec![
                "1",
                "Two Sum",
                "https://leetcode.com/problems/two-sum/",
                "Easy",
                "Hash Map",
                "High",
                "2",
                "45",
                "2024-01-15",
                "true",
                "2",
                "2",
                "22.5",
                "2024-01-14",
                "2024-01-15",
                "O(n)",
                "O(n)",
            ]
        );
    }

    #[test]
    fn test_row_defaults() {
        let row = MetricsRow::from_record(&ProblemRecord::default());
        let fields = row.fields();

        assert_eq!(fields[3], "");
        assert_eq!(fields[9], "false");
        assert_eq!(fields[11], "0");
        assert_eq!(fields[12], "0");
        assert_eq!(fields[13], "");
    }
}
