//! New command implementation.
//!
//! Validates the identifying parameters, then scaffolds the problem folder
//! and prints the created paths.

use super::models::NewArgs;
use crate::parser::Difficulty;
use crate::scaffold::layout::slugify;
use crate::scaffold::{create_problem_folder, NewProblem, ScaffoldedProblem};
use anyhow::{Context, Result};
use log::info;

/// Execute the new command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Invalid arguments (checked before any file I/O)
/// * Folder already initialized without `force`
/// * File write errors
pub fn execute_new(args: NewArgs) -> Result<ScaffoldedProblem> {
    let problem = validate_args(&args)?;

    info!("Creating problem #{}: {}", problem.problem_id, problem.title);

    let created = create_problem_folder(&args.problems_dir, &problem, args.force)
        .context("Failed to create problem folder")?;

    println!("Created problem folder: {}", created.dir.display());
    println!("Files created:");
    println!("  - {}", created.readme_path.display());
    println!("  - {}", created.solution_path.display());
    println!("  - {}", created.metrics_path.display());

    Ok(created)
}

/// Validate new-command arguments
///
/// **Public** - execute_new runs this before any file I/O; callers need not
///
/// # Returns
/// The parsed problem parameters if every argument is valid
pub fn validate_args(args: &NewArgs) -> Result<NewProblem> {
    let difficulty: Difficulty = args.difficulty.parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let title = args.title.trim();
    if title.is_empty() {
        anyhow::bail!("Title cannot be empty");
    }

    if slugify(title).is_empty() {
        anyhow::bail!("Title must contain at least one letter or digit");
    }

    let pattern = args.pattern.trim();
    if pattern.is_empty() {
        anyhow::bail!("Pattern cannot be empty");
    }

    let tags = args.tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    Ok(NewProblem {
        problem_id: args.problem_id,
        title: title.to_string(),
        difficulty,
        pattern: pattern.to_string(),
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> NewArgs {
        NewArgs {
            problem_id: 42,
            title: "Two Sum".to_string(),
            difficulty: "Easy".to_string(),
            pattern: "Hash Map".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        let problem = validate_args(&valid_args()).unwrap();
        assert_eq!(problem.difficulty, Difficulty::Easy);
        assert_eq!(problem.title, "Two Sum");
    }

    #[test]
    fn test_validate_args_bad_difficulty() {
        let args = NewArgs {
            difficulty: "Trivial".to_string(),
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_lowercase_difficulty() {
        let args = NewArgs {
            difficulty: "easy".to_string(),
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_title() {
        let args = NewArgs {
            title: "   ".to_string(),
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_pattern() {
        let args = NewArgs {
            pattern: String::new(),
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_drops_blank_tags() {
        let args = NewArgs {
            tags: vec!["array".to_string(), " ".to_string()],
            ..valid_args()
        };

        let problem = validate_args(&args).unwrap();
        assert_eq!(problem.tags, vec!["array".to_string()]);
    }

    #[test]
    fn test_bad_difficulty_touches_no_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let problems_dir = temp_dir.path().join("problems");
        let args = NewArgs {
            difficulty: "Extreme".to_string(),
            problems_dir: problems_dir.clone(),
            ..valid_args()
        };

        assert!(execute_new(args).is_err());
        assert!(!problems_dir.exists());
    }

    #[test]
    fn test_execute_new_validates_then_scaffolds() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = NewArgs {
            problems_dir: temp_dir.path().to_path_buf(),
            ..valid_args()
        };

        let created = execute_new(args).unwrap();

        assert_eq!(created.dir, temp_dir.path().join("0042-two-sum"));
        assert!(created.metrics_path.exists());
    }

    #[test]
    fn test_blank_title_touches_no_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let problems_dir = temp_dir.path().join("problems");
        let args = NewArgs {
            title: "  ".to_string(),
            problems_dir: problems_dir.clone(),
            ..valid_args()
        };

        assert!(execute_new(args).is_err());
        assert!(!problems_dir.exists());
    }
}
