use pretty_assertions::assert_eq;
use study_tracker::aggregator::metrics::{calculate_time_stats, count_values, find_recent_activity};
use study_tracker::aggregator::{analyze, build_rows, MetricsRow, SprintStats};
use study_tracker::parser::{Difficulty, ProblemRecord, Sprint};

fn record(id: u32, title: &str, difficulty: Difficulty, pattern: &str, mastered: bool) -> ProblemRecord {
    ProblemRecord {
        problem_id: id,
        title: title.to_string(),
        difficulty: Some(difficulty),
        pattern: pattern.to_string(),
        company_frequency: "Medium".to_string(),
        pattern_mastery: mastered,
        ..Default::default()
    }
}

#[test]
fn test_avg_sprint_time_is_mean() {
    let sprints = vec![
        Sprint::new("2024-02-01", 10.0),
        Sprint::new("2024-02-02", 20.0),
        Sprint::new("2024-02-03", 30.0),
    ];

    let stats = SprintStats::from_sprints(&sprints);

    assert_eq!(stats.avg_sprint_time, 20.0);
    assert_eq!(stats.first_sprint_date, "2024-02-01");
    assert_eq!(stats.last_sprint_date, "2024-02-03");
}

#[test]
fn test_zero_sprints() {
    let row = MetricsRow::from_record(&record(1, "Two Sum", Difficulty::Easy, "Hash Map", false));

    assert_eq!(row.sprints.total_sprints, 0);
    assert_eq!(row.sprints.avg_sprint_time, 0.0);
    assert_eq!(row.sprints.first_sprint_date, "");
    assert_eq!(row.sprints.last_sprint_date, "");
}

#[test]
fn test_one_row_per_record() {
    let records = vec![
        record(3, "Longest Substring", Difficulty::Medium, "Sliding Window", false),
        record(1, "Two Sum", Difficulty::Easy, "Hash Map", true),
        record(42, "Trapping Rain Water", Difficulty::Hard, "Two Pointers", false),
    ];

    let rows = build_rows(&records);

    assert_eq!(rows.len(), 3);
    let ids: Vec<u32> = rows.iter().map(|r| r.problem_id).collect();
    assert_eq!(ids, vec![3, 1, 42]);
}

#[test]
fn test_pattern_mastery_rate() {
    let records = vec![
        record(1, "Two Sum", Difficulty::Easy, "Hash Map", true),
        record(49, "Group Anagrams", Difficulty::Medium, "Hash Map", false),
        record(11, "Container With Most Water", Difficulty::Medium, "Two Pointers", true),
    ];

    let report = analyze(&build_rows(&records));

    let hash_map = report.pattern_mastery.iter().find(|m| m.pattern == "Hash Map").unwrap();
    assert_eq!((hash_map.mastered, hash_map.total), (1, 2));
    assert_eq!(format!("{:.1}%", hash_map.rate), "50.0%");

    let two_pointers = report.pattern_mastery.iter().find(|m| m.pattern == "Two Pointers").unwrap();
    assert_eq!(two_pointers.rate, 100.0);
}

#[test]
fn test_difficulty_distribution_descending() {
    let records = vec![
        record(1, "A", Difficulty::Easy, "X", false),
        record(2, "B", Difficulty::Medium, "X", false),
        record(3, "C", Difficulty::Medium, "X", false),
        record(4, "D", Difficulty::Hard, "X", false),
        record(5, "E", Difficulty::Medium, "X", false),
    ];

    let report = analyze(&build_rows(&records));
    let labels: Vec<(&str, usize)> = report
        .difficulty_distribution
        .iter()
        .map(|c| (c.value.as_str(), c.count))
        .collect();

    assert_eq!(labels, vec![("Medium", 3), ("Easy", 1), ("Hard", 1)]);
}

#[test]
fn test_count_values_empty() {
    assert!(count_values(std::iter::empty::<&str>()).is_empty());
}

#[test]
fn test_time_stats_odd_median() {
    let mut records = vec![
        record(1, "A", Difficulty::Easy, "X", false),
        record(2, "B", Difficulty::Easy, "X", false),
        record(3, "C", Difficulty::Easy, "X", false),
    ];
    records[0].total_time_min = 50.0;
    records[1].total_time_min = 5.0;
    records[2].total_time_min = 15.0;

    let time = calculate_time_stats(&build_rows(&records));

    assert_eq!((time.min, time.max, time.median), (5.0, 50.0, 15.0));
}

#[test]
fn test_recent_activity_window() {
    let mut records = vec![
        record(1, "Two Sum", Difficulty::Easy, "Hash Map", false),
        record(2, "Add Two Numbers", Difficulty::Medium, "Linked List", false),
        record(3, "Median of Two Sorted Arrays", Difficulty::Hard, "Binary Search", false),
    ];
    records[0].solved_date = "2024-05-20".to_string();
    records[1].solved_date = "2024-05-13".to_string();
    records[2].solved_date = "2024-05-12".to_string();

    let recent = find_recent_activity(&build_rows(&records));

    let solved: Vec<(&str, &str)> = recent
        .problems
        .iter()
        .map(|p| (p.title.as_str(), p.difficulty.as_str()))
        .collect();
    assert_eq!(solved, vec![("Two Sum", "Easy"), ("Add Two Numbers", "Medium")]);
}
