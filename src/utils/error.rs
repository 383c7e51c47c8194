//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a problem's metrics file
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to read metrics file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("YAML deserialization failed: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Metrics file is empty")]
    Empty,

    #[error("Invalid record: {0}")]
    Invalid(String),
}

/// Errors that can occur while scaffolding a problem folder
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Problem folder already initialized: {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("Title produces an empty folder name: {0:?}")]
    EmptySlug(String),

    #[error("Failed to serialize metrics record: {0}")]
    SerializationFailed(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that abort a metrics export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Problems directory {0} does not exist")]
    ProblemsDirMissing(PathBuf),

    #[error("Failed to scan problems directory: {0}")]
    ScanFailed(#[from] std::io::Error),

    #[error(transparent)]
    Output(#[from] OutputError),
}
