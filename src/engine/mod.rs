// src/engine/mod.rs

//! Orchestration of a single pull.
//!
//! - [`runner`] owns the `PullRunner` sequence and the plan/outcome types.
//! - [`preconditions`] holds the file checks done before anything is
//!   spawned.

pub mod preconditions;
pub mod runner;

pub use preconditions::ensure_runnable;
pub use runner::{ExecutableSource, PullRunner, RunOutcome, RunPlan};
