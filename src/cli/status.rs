//! Status command implementation

use std::path::PathBuf;

use colored::Colorize;
use odmwatch_core::error::{OdmwatchError, StopError};
use odmwatch_core::worker::{query_status, WorkerStatus};

use super::resolve_pid_file;

/// Run the status command
///
/// Exit code 0 only when the worker is running; not-running and stale
/// states surface as errors so scripts can branch on the exit code.
pub fn run_status(pid_file: Option<PathBuf>) -> Result<(), OdmwatchError> {
    let pid_file = resolve_pid_file(pid_file);

    match query_status(&pid_file)? {
        WorkerStatus::Running { pid } => {
            println!("odmwatchd: {} (PID {})", "running".green(), pid);
            Ok(())
        }
        WorkerStatus::NotRunning => {
            println!("odmwatchd: {}", "not running".red());
            Err(StopError::HandleNotFound {
                path: pid_file.path().to_path_buf(),
            }
            .into())
        }
        WorkerStatus::Stale { pid } => {
            println!(
                "odmwatchd: {} (PID file names dead process {})",
                "not running".yellow(),
                pid
            );
            Err(StopError::StaleHandle { pid }.into())
        }
    }
}
