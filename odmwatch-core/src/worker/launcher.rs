//! Worker launch operation
//!
//! Spawns the worker daemon detached from the invoking session, then
//! records its PID in the PID file. Run once at service start time; the
//! restart policy, if any, belongs to the external service manager.

use std::path::PathBuf;

use tracing::{error, info};

use crate::error::StartError;
use crate::worker::handle::PidFile;
use crate::worker::process;

/// Outcome of a successful start request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartOutcome {
    /// PID of the launched worker, as recorded in the PID file
    pub pid: i32,
}

/// Launches the worker daemon and records its PID
#[derive(Debug)]
pub struct Launcher {
    worker: String,
    pid_file: PidFile,
}

impl Launcher {
    /// Create a launcher for the given worker program and PID file
    ///
    /// `worker` is either an executable name resolved through PATH or an
    /// explicit path to the worker binary.
    pub fn new(worker: impl Into<String>, pid_file: PidFile) -> Self {
        Self {
            worker: worker.into(),
            pid_file,
        }
    }

    /// Start the worker daemon
    ///
    /// The configuration path is passed through to the worker unmodified as
    /// `--config <path>`; it is required and must be non-empty. On success
    /// exactly one process has been spawned and the PID file contains its
    /// PID, overwriting any prior content.
    ///
    /// # Errors
    ///
    /// - `StartError::MissingArgument` if no configuration path was given;
    ///   nothing is spawned.
    /// - `StartError::SpawnFailed` if the worker executable cannot be
    ///   resolved or started; no PID file is written.
    /// - `StartError::HandlePersistFailed` if the worker spawned but the
    ///   PID file could not be written. The worker keeps running unmanaged;
    ///   this is the one failure mode that leaves state behind and it is
    ///   logged at error level.
    pub fn start(&self, config_path: Option<&str>) -> Result<StartOutcome, StartError> {
        let config_path = match config_path {
            Some(path) if !path.trim().is_empty() => path,
            _ => return Err(StartError::MissingArgument),
        };

        let program = self.resolve_worker()?;

        let pid = process::spawn_detached(&program, config_path).map_err(|e| {
            StartError::SpawnFailed {
                worker: self.worker.clone(),
                reason: e.to_string(),
            }
        })? as i32;

        info!(
            "Started worker process {} with configuration {}",
            pid, config_path
        );

        if let Err(e) = self.pid_file.write(pid) {
            error!(
                "Worker process {} is running but could not be recorded in {}: {}. \
                 The process is now unmanaged and must be stopped by hand.",
                pid,
                self.pid_file.path().display(),
                e
            );
            return Err(StartError::HandlePersistFailed {
                pid,
                path: self.pid_file.path().to_path_buf(),
                reason: e.to_string(),
            });
        }

        Ok(StartOutcome { pid })
    }

    /// Resolve the worker program to an executable path
    ///
    /// Names without a path separator are looked up through PATH so the
    /// failure surfaces before any process is created.
    fn resolve_worker(&self) -> Result<PathBuf, StartError> {
        which::which(&self.worker).map_err(|e| StartError::SpawnFailed {
            worker: self.worker.clone(),
            reason: e.to_string(),
        })
    }
}
