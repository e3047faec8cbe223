//! Error types for the odmwatch daemon controller
//!
//! This module defines all error types used throughout the application.
//! Every failure mode of the start and stop operations is a distinct,
//! inspectable variant so that wrapping tooling (a systemd unit, a wrapper
//! script) can decide its own policy per condition.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the odmwatch application
#[derive(Error, Debug)]
pub enum OdmwatchError {
    /// Errors raised while launching the worker
    #[error("Start error: {0}")]
    Start(#[from] StartError),

    /// Errors raised while stopping the worker
    #[error("Stop error: {0}")]
    Stop(#[from] StopError),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure modes of launching the worker daemon
#[derive(Error, Debug)]
pub enum StartError {
    /// No configuration path was supplied, or it was empty. Nothing is
    /// spawned on this path.
    #[error("Missing worker configuration path (pass --config <file>)")]
    MissingArgument,

    /// The worker executable could not be started. No PID file is written
    /// on this path.
    #[error("Failed to spawn worker '{worker}': {reason}")]
    SpawnFailed { worker: String, reason: String },

    /// The worker spawned but its PID could not be recorded. The process
    /// keeps running unmanaged; callers must surface this loudly.
    #[error("Worker started with PID {pid} but the PID file {path} could not be written: {reason} (process is now unmanaged)")]
    HandlePersistFailed {
        pid: i32,
        path: PathBuf,
        reason: String,
    },
}

/// Failure modes of stopping the worker daemon
#[derive(Error, Debug)]
pub enum StopError {
    /// No PID file exists; there is nothing to stop. Benign for a second
    /// stop in a row.
    #[error("No PID file found at {path}")]
    HandleNotFound { path: PathBuf },

    /// The PID file exists but its content is not a decimal PID. The file
    /// is left in place for inspection.
    #[error("PID file {path} does not contain a valid PID: {content:?}")]
    CorruptHandle { path: PathBuf, content: String },

    /// The recorded process is no longer running. The PID file is left
    /// untouched.
    #[error("Worker process {pid} is not running (stale PID file)")]
    StaleHandle { pid: i32 },

    /// The termination request could not be delivered. The PID file is left
    /// in place since the true process state is uncertain.
    #[error("Failed to signal worker process {pid}: {reason}")]
    SignalFailed { pid: i32, reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, OdmwatchError>;
