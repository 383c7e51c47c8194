//! Schema of a problem's `metrics.yml` record.
//!
//! Field order matches the order written by the scaffolder. Every field
//! except a sprint's `date` and `duration_min` has a named default, so a
//! hand-edited file may omit anything it does not care about.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Problem difficulty as labelled on LeetCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "invalid difficulty '{}' (expected one of: Easy, Medium, Hard)",
                other
            )),
        }
    }
}

/// Top-level record stored in each problem folder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemRecord {
    pub problem_id: u32,
    pub title: String,
    pub leetcode_url: String,
    pub tags: Vec<String>,

    /// `None` when the file leaves difficulty out or blank; exported as an empty cell
    #[serde(deserialize_with = "blank_as_unset")]
    pub difficulty: Option<Difficulty>,

    pub pattern: String,
    pub company_frequency: String,
    pub attempts: u32,

    /// Accumulated practice time in minutes
    pub total_time_min: f64,

    /// `YYYY-MM-DD`, empty while unsolved. Kept as text so a malformed date
    /// only affects the recent-activity report, not the whole record.
    #[serde(deserialize_with = "null_as_empty")]
    pub solved_date: String,

    pub pattern_mastery: bool,

    /// Self-assessed difficulty, 0 (unrated) to 5
    pub difficulty_rating: u8,

    /// Practice sessions in chronological order
    pub sprints: Vec<Sprint>,

    pub complexity: Complexity,
    pub approach_summary: String,
    pub key_insights: Vec<String>,
    pub alternative_approaches: Vec<String>,
    pub edge_cases_handled: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub related_problems: Vec<String>,
}

/// A single timed practice session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub date: String,
    pub duration_min: f64,

    /// learn / implement / review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,

    /// stuck / partial / solved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Sprint {
    pub fn new(date: impl Into<String>, duration_min: f64) -> Self {
        Self {
            date: date.into(),
            duration_min,
            phase: None,
            progress: None,
            notes: None,
        }
    }
}

/// Complexity annotation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Complexity {
    pub time: String,
    pub space: String,
    pub explanation: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_unset<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}
