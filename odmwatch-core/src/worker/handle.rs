//! PID file management
//!
//! The PID file is the sole artifact shared between the start and stop
//! operations: a plain-text file holding the decimal PID of the launched
//! worker. The path is injected rather than hardcoded so tests and
//! alternative deployments can isolate filesystem state per run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StopError;

/// Handle to the PID file recording the managed worker process
#[derive(Debug, Clone)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Create a PID file handle at an explicit path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a PID file handle at the default location
    pub fn at_default_path() -> Self {
        Self::new(default_pid_file_path())
    }

    /// Path of the PID file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the PID file currently exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the recorded PID
    ///
    /// # Errors
    ///
    /// Returns `StopError::HandleNotFound` if the file is absent and
    /// `StopError::CorruptHandle` if its content is not a decimal PID.
    pub fn read(&self) -> Result<i32, StopError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StopError::HandleNotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                // Unreadable counts as corrupt: the file is there but the
                // PID cannot be recovered from it.
                return Err(StopError::CorruptHandle {
                    path: self.path.clone(),
                    content: format!("<unreadable: {}>", e),
                });
            }
        };

        content
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|pid| *pid > 0)
            .ok_or_else(|| StopError::CorruptHandle {
                path: self.path.clone(),
                content: content.trim().to_string(),
            })
    }

    /// Record a PID, overwriting any prior content
    ///
    /// Creates the parent directory if needed. The file holds the decimal
    /// PID and nothing else.
    pub fn write(&self, pid: i32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{}\n", pid))
    }

    /// Remove the PID file
    pub fn remove(&self) -> io::Result<()> {
        fs::remove_file(&self.path)
    }
}

/// Get the default PID file path
///
/// Uses XDG_RUNTIME_DIR if available, otherwise /tmp with a per-user name.
pub fn default_pid_file_path() -> PathBuf {
    if let Ok(runtime_dir) = std::env::var("XDG_RUNTIME_DIR") {
        Path::new(&runtime_dir).join("odmwatch.pid")
    } else {
        Path::new("/tmp").join(format!("odmwatch-{}.pid", nix::unistd::getuid()))
    }
}
