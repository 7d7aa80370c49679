// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`launcher`] provides the `ProcessLauncher` trait and the production
//!   `TokioLauncher` built on `tokio::process::Command`.
//! - [`process`] holds the live `ProcessHandle`, its merged stdout/stderr
//!   line stream and the `RunStatus` it reports on exit.

pub mod launcher;
pub mod process;

pub use launcher::{ProcessLauncher, TokioLauncher};
pub use process::{BoxFuture, ProcessHandle, RunStatus, RunningProcess};
