//! Stop command implementation

use std::path::PathBuf;

use odmwatch_core::error::OdmwatchError;
use odmwatch_core::worker::Terminator;
use tracing::info;

use super::resolve_pid_file;

/// Run the stop command
pub fn run_stop(pid_file: Option<PathBuf>) -> Result<(), OdmwatchError> {
    let pid_file = resolve_pid_file(pid_file);
    let terminator = Terminator::new(pid_file);

    let outcome = terminator.stop()?;

    info!("Worker daemon stopped, PID {}", outcome.pid);
    println!("Asked worker process {} to shut down", outcome.pid);
    Ok(())
}
