//! Study Tracker
//!
//! Scaffolding and metrics export for algorithm practice.
//!
//! Every practice problem lives in its own folder holding a
//! `metrics.yml` record, a `readme.md` notes template and a
//! `solution.cpp` stub. This crate provides the core implementation
//! for the `study-tracker` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! study-tracker new 1 "Two Sum" Easy "Hash Map" --tags array hash-table
//! study-tracker export --analyze
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod scaffold;
pub mod utils;
