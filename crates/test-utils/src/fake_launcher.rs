use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use pullwrap::errors::{PullError, Result};
use pullwrap::exec::{BoxFuture, ProcessLauncher, RunStatus, RunningProcess};
use pullwrap::invocation::RunInvocation;

/// A launcher that:
/// - records every invocation it was asked to start
/// - hands back a process replaying a fixed list of output lines and then
///   exiting with a fixed code.
#[derive(Clone)]
pub struct FakeLauncher {
    lines: Vec<String>,
    exit_code: i32,
    fail_after: Option<usize>,
    launched: Arc<Mutex<Vec<RunInvocation>>>,
}

impl FakeLauncher {
    pub fn new(lines: &[&str], exit_code: i32) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            exit_code,
            fail_after: None,
            launched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make the stream fail with an I/O error after `n` lines.
    pub fn failing_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn launched(&self) -> Vec<RunInvocation> {
        self.launched.lock().unwrap().clone()
    }

    pub fn launch_count(&self) -> usize {
        self.launched.lock().unwrap().len()
    }
}

impl ProcessLauncher for FakeLauncher {
    fn launch(&self, invocation: &RunInvocation) -> Result<Box<dyn RunningProcess>> {
        self.launched.lock().unwrap().push(invocation.clone());
        Ok(Box::new(ScriptedProcess {
            lines: self.lines.iter().cloned().collect(),
            remaining_before_error: self.fail_after,
            exit_code: self.exit_code,
            drained: false,
        }))
    }
}

/// Process stand-in driven by [`FakeLauncher`].
pub struct ScriptedProcess {
    lines: VecDeque<String>,
    remaining_before_error: Option<usize>,
    exit_code: i32,
    drained: bool,
}

impl RunningProcess for ScriptedProcess {
    fn next_line(&mut self) -> BoxFuture<'_, Result<Option<String>>> {
        Box::pin(async move {
            if let Some(remaining) = self.remaining_before_error.as_mut() {
                if *remaining == 0 {
                    return Err(PullError::StreamRead(io::Error::new(
                        io::ErrorKind::BrokenPipe,
                        "scripted read failure",
                    )));
                }
                *remaining -= 1;
            }

            let next = self.lines.pop_front();
            if next.is_none() {
                self.drained = true;
            }
            Ok(next)
        })
    }

    fn wait(&mut self) -> BoxFuture<'_, Result<RunStatus>> {
        Box::pin(async move {
            assert!(self.drained, "wait() called before the output stream was drained");
            Ok(RunStatus::from_code(self.exit_code))
        })
    }
}
