//! Aggregation of problem records into table rows and statistics.
//!
//! This module transforms loaded records into:
//! - Aggregate table rows (raw plus sprint-derived columns)
//! - The descriptive analysis report

pub mod row_builder;
pub mod metrics;

// Re-export main types and functions
pub use row_builder::{build_rows, MetricsRow, SprintStats};
pub use metrics::{analyze, AnalysisReport, CategoryCount, PatternMastery, RecentActivity};
