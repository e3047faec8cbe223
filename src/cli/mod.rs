//! CLI command implementations
//!
//! This module contains the implementation of all CLI subcommands.

pub mod start;
pub mod status;
pub mod stop;

use std::path::PathBuf;

use odmwatch_core::worker::PidFile;

/// Resolve the PID file from an optional CLI override
pub fn resolve_pid_file(pid_file: Option<PathBuf>) -> PidFile {
    match pid_file {
        Some(path) => PidFile::new(path),
        None => PidFile::at_default_path(),
    }
}
