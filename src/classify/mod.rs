// src/classify/mod.rs

//! Output classification and recap extraction.
//!
//! - [`state`] is the pure per-line state machine (task context, recap
//!   capture). It needs no process and no sink.
//! - [`extractor`] feeds lines from a running process (or a recorded list)
//!   through that state machine and writes line and recap events to a
//!   [`LogSink`](crate::sink::LogSink).

pub mod extractor;
pub mod state;

pub use extractor::{classify_lines, consume, Classifier, RunSummary};
pub use state::{ClassificationState, RECAP_MARKER, TASK_MARKER};
