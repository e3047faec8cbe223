//! Worker stop operation
//!
//! Reads the recorded PID, confirms the worker is still alive, and delivers
//! a graceful termination request. Run once at service stop time.

use nix::errno::Errno;
use tracing::{info, warn};

use crate::error::StopError;
use crate::worker::handle::PidFile;
use crate::worker::process;

/// Outcome of a successful stop request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopOutcome {
    /// PID the termination request was delivered to
    pub pid: i32,
}

/// Stops the worker daemon recorded in the PID file
#[derive(Debug)]
pub struct Terminator {
    pid_file: PidFile,
}

impl Terminator {
    /// Create a terminator reading from the given PID file
    pub fn new(pid_file: PidFile) -> Self {
        Self { pid_file }
    }

    /// Stop the worker daemon
    ///
    /// Sends one SIGTERM and removes the PID file once the signal is
    /// delivered. Fire-and-forget: the worker's actual exit is not awaited
    /// and there is no escalation to SIGKILL.
    ///
    /// # Errors
    ///
    /// - `StopError::HandleNotFound` if no PID file exists; nothing is
    ///   signaled. A second stop in a row lands here, making the operation
    ///   idempotent for callers that treat it as benign.
    /// - `StopError::CorruptHandle` if the PID file content is not a PID.
    /// - `StopError::StaleHandle` if the recorded process is no longer
    ///   running. The stale file is left untouched.
    /// - `StopError::SignalFailed` if SIGTERM delivery fails; the PID file
    ///   is kept since the true process state is uncertain.
    pub fn stop(&self) -> Result<StopOutcome, StopError> {
        let pid = self.pid_file.read()?;

        if !process::is_alive(pid) {
            // The worker died without a stop being invoked. Report it and
            // leave the file as found.
            return Err(StopError::StaleHandle { pid });
        }

        process::send_terminate(pid).map_err(|e| {
            let reason = match e {
                Errno::ESRCH => "process exited before the signal was sent".to_string(),
                Errno::EPERM => "permission denied".to_string(),
                other => other.to_string(),
            };
            StopError::SignalFailed { pid, reason }
        })?;

        info!("Delivered termination request to worker process {}", pid);

        if let Err(e) = self.pid_file.remove() {
            // The signal was delivered, so the stop itself still succeeded
            warn!(
                "Could not remove PID file {} after stopping worker {}: {}",
                self.pid_file.path().display(),
                pid,
                e
            );
        }

        Ok(StopOutcome { pid })
    }
}
