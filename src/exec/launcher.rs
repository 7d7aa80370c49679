// src/exec/launcher.rs

//! Pluggable process launcher.
//!
//! The orchestrator talks to a `ProcessLauncher` instead of calling
//! `tokio::process::Command` directly, so tests can substitute a launcher
//! that replays recorded output (or records that it was never called).

use std::process::Stdio;

use tokio::process::Command;
use tracing::info;

use crate::errors::{PullError, Result};
use crate::invocation::RunInvocation;

use super::process::{ProcessHandle, RunningProcess};

pub trait ProcessLauncher: Send + Sync {
    /// Start the process described by `invocation`.
    ///
    /// Fails with [`PullError::Launch`] if the OS refuses to spawn it.
    fn launch(&self, invocation: &RunInvocation) -> Result<Box<dyn RunningProcess>>;
}

/// Real launcher used in production.
#[derive(Debug, Clone, Default)]
pub struct TokioLauncher;

impl ProcessLauncher for TokioLauncher {
    fn launch(&self, invocation: &RunInvocation) -> Result<Box<dyn RunningProcess>> {
        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|source| PullError::Launch {
            program: invocation.program().to_path_buf(),
            source,
        })?;

        let handle = ProcessHandle::new(child);
        info!(pid = ?handle.id(), program = ?invocation.program(), "started pull process");

        Ok(Box::new(handle))
    }
}
