//! Study Tracker CLI
//!
//! Scaffolds practice problem folders and exports their metrics
//! into a CSV table with an optional analysis report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use study_tracker::commands::{
    display_version, execute_export, execute_new, validate_record_path,
    ExportArgs, NewArgs,
};
use study_tracker::utils::config::{DEFAULT_OUTPUT_FILE, DEFAULT_PROBLEMS_DIR, PROBLEMS_DIR_ENV};

/// Study Tracker - scaffolding and metrics for algorithm practice
#[derive(Parser, Debug)]
#[command(name = "study-tracker")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new problem folder with template files
    New {
        /// LeetCode problem ID
        problem_id: u32,

        /// Problem title
        title: String,

        /// Problem difficulty (Easy, Medium or Hard)
        difficulty: String,

        /// Primary algorithmic pattern
        pattern: String,

        /// Problem tags
        #[arg(long, num_args = 1..)]
        tags: Vec<String>,

        /// Directory containing problem folders
        #[arg(long, env = PROBLEMS_DIR_ENV, default_value = DEFAULT_PROBLEMS_DIR)]
        problems_dir: PathBuf,

        /// Overwrite an existing problem folder
        #[arg(long)]
        force: bool,
    },

    /// Export problem metrics to CSV
    Export {
        /// Directory containing problem folders
        #[arg(long, env = PROBLEMS_DIR_ENV, default_value = DEFAULT_PROBLEMS_DIR)]
        problems_dir: PathBuf,

        /// Output CSV file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Print an analysis report after exporting
        #[arg(long)]
        analyze: bool,

        /// Print the analysis report as JSON
        #[arg(long, requires = "analyze")]
        json: bool,
    },

    /// Validate a metrics file or problem folder
    Validate {
        /// Path to metrics.yml or to a problem folder
        path: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::New {
            problem_id,
            title,
            difficulty,
            pattern,
            tags,
            problems_dir,
            force,
        } => {
            let args = NewArgs {
                problem_id,
                title,
                difficulty,
                pattern,
                tags,
                problems_dir,
                force,
            };

            execute_new(args)?;
        }

        Commands::Export {
            problems_dir,
            output,
            analyze,
            json,
        } => {
            let args = ExportArgs {
                problems_dir,
                output,
                analyze,
                json,
            };

            execute_export(args)?;
        }

        Commands::Validate { path } => {
            validate_record_path(&path)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
