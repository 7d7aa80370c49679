// src/exec/process.rs

//! Live child process with a merged, line-oriented output stream.

use std::fmt;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::process::ExitStatus;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::errors::{PullError, Result};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A started subprocess as seen by the orchestrator.
///
/// `next_line` yields output in arrival order and `None` exactly once the
/// stream is exhausted. `wait` is only meaningful after that.
pub trait RunningProcess: Send {
    fn next_line(&mut self) -> BoxFuture<'_, Result<Option<String>>>;

    fn wait(&mut self) -> BoxFuture<'_, Result<RunStatus>>;
}

/// How the child terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl RunStatus {
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to propagate from this process. Signals map to `128 + n`.
    pub fn exit_code(&self) -> i32 {
        match (self.code, self.signal) {
            (Some(code), _) => code,
            (None, Some(sig)) => 128 + sig,
            (None, None) => 1,
        }
    }
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit code {code}"),
            (None, Some(sig)) => write!(f, "killed by signal {sig}"),
            (None, None) => write!(f, "unknown exit status"),
        }
    }
}

/// Handle to a process started by [`TokioLauncher`](super::TokioLauncher).
///
/// Stdout and stderr are each read by a background task and funnelled into
/// one bounded channel. The channel closes once both pipes hit EOF, which
/// is what ends the line stream.
pub struct ProcessHandle {
    child: Child,
    lines: mpsc::Receiver<io::Result<String>>,
}

impl ProcessHandle {
    pub(crate) fn new(mut child: Child) -> Self {
        let (tx, rx) = mpsc::channel::<io::Result<String>>(64);

        if let Some(stdout) = child.stdout.take() {
            spawn_line_reader("stdout", stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_line_reader("stderr", stderr, tx.clone());
        }
        drop(tx);

        Self { child, lines: rx }
    }

    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }
}

impl RunningProcess for ProcessHandle {
    fn next_line(&mut self) -> BoxFuture<'_, Result<Option<String>>> {
        Box::pin(async move {
            match self.lines.recv().await {
                Some(Ok(line)) => Ok(Some(line)),
                Some(Err(e)) => Err(PullError::StreamRead(e)),
                None => Ok(None),
            }
        })
    }

    fn wait(&mut self) -> BoxFuture<'_, Result<RunStatus>> {
        Box::pin(async move {
            let status = self.child.wait().await?;
            Ok(RunStatus::from(status))
        })
    }
}

fn spawn_line_reader<R>(stream: &'static str, pipe: R, tx: mpsc::Sender<io::Result<String>>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut reader = BufReader::new(pipe);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    trace!(stream, "read line");
                    if tx.send(Ok(decode_line(&buf))).await.is_err() {
                        // Consumer is gone; nobody wants the rest.
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.send(Err(e)).await;
                    break;
                }
            }
        }

        debug!(stream, "output reader finished");
    });
}

/// Strip the line terminator and decode. Invalid UTF-8 is replaced, not
/// rejected: it is ordinary child output, not a read failure.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

