//! Configuration and constants for the CLI.

/// File holding a problem's metadata record. Its presence defines a record.
pub const METRICS_FILE_NAME: &str = "metrics.yml";

/// Notes document written by the scaffolder
pub const README_FILE_NAME: &str = "readme.md";

/// Solution stub written by the scaffolder
pub const SOLUTION_FILE_NAME: &str = "solution.cpp";

/// Default directory scanned by `export` and populated by `new`
pub const DEFAULT_PROBLEMS_DIR: &str = "problems";

/// Default aggregate table path
pub const DEFAULT_OUTPUT_FILE: &str = "metrics.csv";

/// Environment variable overriding the problems directory
pub const PROBLEMS_DIR_ENV: &str = "STUDY_TRACKER_PROBLEMS_DIR";

pub const LEETCODE_PROBLEMS_URL: &str = "https://leetcode.com/problems";

/// Label assigned to freshly scaffolded problems, updated by hand later
pub const DEFAULT_COMPANY_FREQUENCY: &str = "Medium";

pub const MAX_DIFFICULTY_RATING: u8 = 5;

/// Width of the recent-activity window, inclusive of both ends
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Date format used for solved dates and sprint dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const CSV_COLUMN_COUNT: usize = 17;

/// Column order of the aggregate table
pub const CSV_COLUMNS: [&str; CSV_COLUMN_COUNT] = [
    "problem_id",
    "title",
    "leetcode_url",
    "difficulty",
    "pattern",
    "company_frequency",
    "attempts",
    "total_time_min",
    "solved_date",
    "pattern_mastery",
    "difficulty_rating",
    "total_sprints",
    "avg_sprint_time",
    "first_sprint_date",
    "last_sprint_date",
    "time_complexity",
    "space_complexity",
];
