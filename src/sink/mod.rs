// src/sink/mod.rs

//! Destinations for classified output.
//!
//! The classifier only knows the [`LogSink`] trait. [`file::FileLogSink`]
//! is the production sink; tests use an in-memory one.

use chrono::{DateTime, Local};

use crate::errors::Result;

pub mod file;

pub use file::{FileLogSink, SUMMARY_LOG_NAME, VERBOSE_LOG_NAME};

/// Receiver of per-line events and the final recap event of a run.
///
/// Implementations must accept every line exactly once, in the order given.
pub trait LogSink: Send {
    /// One line of subprocess output with the task it belongs to.
    fn write_line(&mut self, line: &str, task: Option<&str>) -> Result<()>;

    /// Called at most once per run, after the last `write_line`.
    fn write_recap(
        &mut self,
        start_time: DateTime<Local>,
        end_time: DateTime<Local>,
        recap_line: &str,
    ) -> Result<()>;
}
