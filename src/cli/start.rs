//! Start command implementation

use std::path::PathBuf;

use odmwatch_core::error::OdmwatchError;
use odmwatch_core::worker::Launcher;
use tracing::info;

use super::resolve_pid_file;

/// Run the start command
pub fn run_start(
    config: Option<&str>,
    worker: &str,
    pid_file: Option<PathBuf>,
) -> Result<(), OdmwatchError> {
    let pid_file = resolve_pid_file(pid_file);
    let launcher = Launcher::new(worker, pid_file.clone());

    let outcome = launcher.start(config)?;

    info!("Worker daemon started, PID {}", outcome.pid);
    println!(
        "Started {} (PID {}), recorded in {}",
        worker,
        outcome.pid,
        pid_file.path().display()
    );
    Ok(())
}
