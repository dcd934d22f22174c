//! Exclusive handle to the spawned server process.
use std::{
    io,
    path::Path,
    process::{ExitStatus, Output, Stdio},
};

use tokio::process::{Child, Command};
use tracing::info;

use crate::lib::errors::LaunchError;

/// Outcome of the guaranteed shutdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// SIGTERM was sent and the child was reaped.
    Terminated(ExitStatus),
    /// The child had already exited; no termination was attempted.
    AlreadyExited(ExitStatus),
}

impl ShutdownOutcome {
    pub fn status(&self) -> ExitStatus {
        match self {
            ShutdownOutcome::Terminated(status) | ShutdownOutcome::AlreadyExited(status) => *status,
        }
    }
}

/// OS process handle owned exclusively by the launcher.
pub struct ManagedServerProcess {
    child: Child,
}

impl ManagedServerProcess {
    /// Spawn the executable with stdout/stderr captured as pipes.
    ///
    /// Propagates the underlying OS error when the path is invalid or not
    /// executable; there is no retry.
    pub fn spawn(executable: &Path) -> Result<Self, LaunchError> {
        let mut command = Command::new(executable);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let child = command.spawn().map_err(|source| LaunchError::Spawn {
            path: executable.to_path_buf(),
            source,
        })?;
        info!(
            target: "supabase_mcp_demo::launcher",
            executable = %executable.display(),
            pid = child.id(),
            "Spawned server process"
        );
        Ok(Self { child })
    }

    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Non-blocking exit check.
    pub fn poll_exit(&mut self) -> Result<Option<ExitStatus>, LaunchError> {
        self.child
            .try_wait()
            .map_err(|source| LaunchError::Poll { source })
    }

    /// Collect the captured output of an already-exited child.
    pub async fn into_captured_output(self) -> Result<Output, LaunchError> {
        self.child
            .wait_with_output()
            .await
            .map_err(|source| LaunchError::CaptureOutput { source })
    }

    /// Wait for the child to exit on its own.
    pub async fn wait(&mut self) -> Result<ExitStatus, LaunchError> {
        self.child
            .wait()
            .await
            .map_err(|source| LaunchError::Wait { source })
    }

    /// Terminate-and-reap, skipped when the child already exited.
    ///
    /// Runs on every launcher exit path. SIGTERM is sent at most once.
    pub async fn shutdown(&mut self) -> Result<ShutdownOutcome, LaunchError> {
        if let Some(status) = self.poll_exit()? {
            return Ok(ShutdownOutcome::AlreadyExited(status));
        }

        self.send_sigterm()?;
        let status = self.wait().await?;
        Ok(ShutdownOutcome::Terminated(status))
    }

    fn send_sigterm(&self) -> Result<(), LaunchError> {
        // `id` is None once the child has been reaped; `wait` handles the
        // remaining race where the process exits between here and the kill.
        let Some(pid) = self.child.id() else {
            return Ok(());
        };
        let result = unsafe { libc::kill(pid as libc::pid_t, libc::SIGTERM) };
        if result != 0 {
            let source = io::Error::last_os_error();
            if source.raw_os_error() == Some(libc::ESRCH) {
                return Ok(());
            }
            return Err(LaunchError::Terminate {
                pid: Some(pid),
                source,
            });
        }
        Ok(())
    }
}
