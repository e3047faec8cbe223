//! Worker status query
//!
//! Read-only view over the PID file and process table. Never mutates the
//! PID file and never signals the worker.

use crate::error::StopError;
use crate::worker::handle::PidFile;
use crate::worker::process;

/// Observed state of the managed worker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStatus {
    /// A PID is recorded and the process is running
    Running { pid: i32 },
    /// No PID file exists
    NotRunning,
    /// A PID is recorded but the process is gone
    Stale { pid: i32 },
}

/// Query the current worker status
///
/// # Errors
///
/// Returns `StopError::CorruptHandle` when the PID file exists but does not
/// contain a PID; an absent file is reported as `NotRunning`, not an error.
pub fn query_status(pid_file: &PidFile) -> Result<WorkerStatus, StopError> {
    let pid = match pid_file.read() {
        Ok(pid) => pid,
        Err(StopError::HandleNotFound { .. }) => return Ok(WorkerStatus::NotRunning),
        Err(e) => return Err(e),
    };

    if process::is_alive(pid) {
        Ok(WorkerStatus::Running { pid })
    } else {
        Ok(WorkerStatus::Stale { pid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_without_pid_file_is_not_running() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = PidFile::new(dir.path().join("odmwatch.pid"));

        assert_eq!(query_status(&pid_file).unwrap(), WorkerStatus::NotRunning);
    }

    #[test]
    fn test_status_with_live_pid_is_running() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = PidFile::new(dir.path().join("odmwatch.pid"));

        // Our own PID is as live a process as any
        let my_pid = std::process::id() as i32;
        pid_file.write(my_pid).unwrap();

        assert_eq!(
            query_status(&pid_file).unwrap(),
            WorkerStatus::Running { pid: my_pid }
        );
    }

    #[test]
    fn test_status_with_dead_pid_is_stale_and_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = PidFile::new(dir.path().join("odmwatch.pid"));

        pid_file.write(999999).unwrap();

        assert_eq!(
            query_status(&pid_file).unwrap(),
            WorkerStatus::Stale { pid: 999999 }
        );
        assert!(pid_file.exists());
    }

    #[test]
    fn test_status_with_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = PidFile::new(dir.path().join("odmwatch.pid"));

        std::fs::write(pid_file.path(), "garbage").unwrap();

        assert!(matches!(
            query_status(&pid_file),
            Err(StopError::CorruptHandle { .. })
        ));
    }
}
