//! Command-line interface for cover-fetch.
//!
//! Thin wrapper over [`crate::cover::CoverResolver`] for resolving and
//! downloading covers from a shell.

mod commands;

pub use commands::{Cli, Commands, run_command};
