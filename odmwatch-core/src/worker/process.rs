//! OS process primitives for the worker daemon
//!
//! This module isolates the three OS collaborators the controller needs:
//! spawning the worker detached from the invoking session, probing whether
//! a PID is alive, and delivering a graceful termination signal.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use nix::errno::Errno;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tracing::debug;

/// Check whether a process with the given PID currently exists
///
/// Uses the signal-0 probe: delivery of "no signal" succeeds exactly when
/// the process exists and we may signal it. EPERM means the process exists
/// but belongs to another user, which still counts as alive.
pub fn is_alive(pid: i32) -> bool {
    match kill(Pid::from_raw(pid), None) {
        Ok(_) => true,
        Err(Errno::EPERM) => true,
        Err(_) => false,
    }
}

/// Send a graceful termination request (SIGTERM) to a process
///
/// Fire-and-forget: no wait for the process to exit and no escalation to
/// SIGKILL. The worker installs its own SIGTERM handler and shuts down
/// cleanly on receipt.
pub fn send_terminate(pid: i32) -> Result<(), Errno> {
    debug!("Sending SIGTERM to worker process {}", pid);
    kill(Pid::from_raw(pid), Signal::SIGTERM)
}

/// Spawn the worker detached from the invoking session
///
/// The worker is started as `<program> --config <config_path>` with stdio
/// detached and `setsid()` run in the child, so it gets its own session and
/// keeps running after the launching shell exits. Exactly one spawn attempt
/// is made.
pub fn spawn_detached(program: &Path, config_path: &str) -> io::Result<u32> {
    use std::os::unix::process::CommandExt;

    let mut command = Command::new(program);
    command
        .arg("--config")
        .arg(config_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // Detach into a new session so the worker is not part of the caller's
    // session and survives its termination.
    unsafe {
        command.pre_exec(|| {
            nix::unistd::setsid().map_err(|e| io::Error::from_raw_os_error(e as i32))?;
            Ok(())
        });
    }

    let child = command.spawn()?;
    let pid = child.id();
    debug!("Spawned worker process {} from {:?}", pid, program);
    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alive_for_current_process() {
        let my_pid = std::process::id() as i32;
        assert!(is_alive(my_pid));
    }

    #[test]
    fn test_is_alive_for_nonexistent_pid() {
        // PID 999999 exceeds the default pid_max on most systems
        assert!(!is_alive(999999));
    }

    #[test]
    fn test_send_terminate_to_nonexistent_pid_is_esrch() {
        assert_eq!(send_terminate(999999), Err(Errno::ESRCH));
    }

    #[test]
    fn test_spawn_detached_reports_missing_program() {
        let result = spawn_detached(Path::new("/nonexistent/worker-binary"), "/etc/worker.conf");
        assert!(result.is_err());
    }

    #[test]
    fn test_spawned_process_can_be_terminated() {
        // Any live process works for probing the primitives
        let mut child = Command::new("sleep")
            .arg("3600")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn mock process");
        let pid = child.id() as i32;

        assert!(is_alive(pid));
        send_terminate(pid).unwrap();

        // Reap the child so the test leaves no zombie
        let _ = child.wait();
        assert!(!is_alive(pid));
    }
}
