//! Worker daemon lifecycle management
//!
//! This module handles launching the odmwatchd worker as a detached
//! background process, PID file bookkeeping, and graceful termination.
//! The PID file is the only coordination point between start and stop.

pub mod handle;
pub mod launcher;
pub mod process;
pub mod status;
pub mod terminator;

pub use handle::PidFile;
pub use launcher::{Launcher, StartOutcome};
pub use status::{query_status, WorkerStatus};
pub use terminator::{StopOutcome, Terminator};

/// Default name of the worker executable, resolved through PATH unless an
/// explicit program path is configured.
pub const DEFAULT_WORKER: &str = "odmwatchd";
