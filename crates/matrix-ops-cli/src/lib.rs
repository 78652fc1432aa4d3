//! matrix-ops-cli: command-line access to the matrix-ops library.
//!
//! Matrices are read from JSON files (`[[1, 2], [3, 4]]`); a job is either
//! described by subcommand arguments or by a JSON [`config::JobConfig`].
pub mod config;
pub mod input;
pub mod runner;
