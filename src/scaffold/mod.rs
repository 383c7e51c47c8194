//! Problem folder scaffolding.
//!
//! Creates `<problems_dir>/<id>-<slug>/` holding a default `metrics.yml`,
//! a `readme.md` notes template and a `solution.cpp` stub.

pub mod layout;
pub mod templates;

use crate::parser::{Complexity, Difficulty, ProblemRecord};
use crate::utils::config::{
    DEFAULT_COMPANY_FREQUENCY, METRICS_FILE_NAME, README_FILE_NAME, SOLUTION_FILE_NAME,
};
use crate::utils::error::ScaffoldError;
use layout::{folder_name, leetcode_url, slugify};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use templates::{render_readme, render_solution};

/// Identifying parameters of a new problem
#[derive(Debug, Clone, PartialEq)]
pub struct NewProblem {
    pub problem_id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub pattern: String,
    pub tags: Vec<String>,
}

impl NewProblem {
    /// Default record written to `metrics.yml`
    pub fn to_record(&self) -> ProblemRecord {
        ProblemRecord {
            problem_id: self.problem_id,
            title: self.title.clone(),
            leetcode_url: leetcode_url(&self.title),
            tags: self.tags.clone(),
            difficulty: Some(self.difficulty),
            pattern: self.pattern.clone(),
            company_frequency: DEFAULT_COMPANY_FREQUENCY.to_string(),
            complexity: Complexity::default(),
            ..Default::default()
        }
    }
}

/// Paths created by `create_problem_folder`
#[derive(Debug, Clone)]
pub struct ScaffoldedProblem {
    pub dir: PathBuf,
    pub readme_path: PathBuf,
    pub solution_path: PathBuf,
    pub metrics_path: PathBuf,
}

/// Create a problem folder with its three template files
///
/// **Public** - main entry point for scaffolding
///
/// # Arguments
/// * `problems_dir` - Parent directory, created if missing
/// * `problem` - Identifying parameters
/// * `force` - Overwrite an already initialized folder
///
/// # Errors
/// * `ScaffoldError::EmptySlug` - Title has no usable characters
/// * `ScaffoldError::AlreadyExists` - Folder holds `metrics.yml` and `force` is off
/// * `ScaffoldError::IoError` - Directory or file could not be written
pub fn create_problem_folder(
    problems_dir: impl AsRef<Path>,
    problem: &NewProblem,
    force: bool,
) -> Result<ScaffoldedProblem, ScaffoldError> {
    if slugify(&problem.title).is_empty() {
        return Err(ScaffoldError::EmptySlug(problem.title.clone()));
    }

    let dir = problems_dir.as_ref().join(folder_name(problem.problem_id, &problem.title));
    let metrics_path = dir.join(METRICS_FILE_NAME);

    if metrics_path.exists() {
        if !force {
            return Err(ScaffoldError::AlreadyExists(dir));
        }
        warn!("Overwriting existing problem folder: {}", dir.display());
    }

    debug!("Creating problem directory: {}", dir.display());
    std::fs::create_dir_all(&dir)?;

    let metrics_yaml = serde_yaml::to_string(&problem.to_record())?;
    std::fs::write(&metrics_path, metrics_yaml)?;

    let readme_path = dir.join(README_FILE_NAME);
    std::fs::write(&readme_path, render_readme(problem))?;

    let solution_path = dir.join(SOLUTION_FILE_NAME);
    std::fs::write(&solution_path, render_solution(problem))?;

    info!("Scaffolded problem #{} in {}", problem.problem_id, dir.display());

    Ok(ScaffoldedProblem {
        dir,
        readme_path,
        solution_path,
        metrics_path,
    })
}
