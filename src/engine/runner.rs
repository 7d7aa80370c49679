// src/engine/runner.rs

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info};

use crate::classify::{self, RunSummary};
use crate::errors::Result;
use crate::exec::{ProcessLauncher, RunStatus};
use crate::fs::FileSystem;
use crate::invocation::{self, PullOptions, RunInvocation};
use crate::resolve::ExecutableResolver;
use crate::sink::LogSink;

use super::preconditions::ensure_runnable;

/// Where the pull executable comes from.
#[derive(Debug, Clone)]
pub enum ExecutableSource {
    /// Configured path; used as-is.
    Explicit(PathBuf),
    /// Look `name` up with the resolver.
    Search {
        name: String,
        resolver: ExecutableResolver,
    },
}

/// Inputs for a single pull.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub executable: ExecutableSource,
    pub options: PullOptions,
}

/// Result of a completed pull.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub invocation: RunInvocation,
    pub status: RunStatus,
    pub summary: RunSummary,
}

/// Sequences one pull: resolve, validate, build, launch, classify, wait.
///
/// Nothing is spawned unless resolution and every file check succeed.
pub struct PullRunner<'a> {
    fs: &'a dyn FileSystem,
    launcher: &'a dyn ProcessLauncher,
}

impl<'a> PullRunner<'a> {
    pub fn new(fs: &'a dyn FileSystem, launcher: &'a dyn ProcessLauncher) -> Self {
        Self { fs, launcher }
    }

    /// Resolve the executable, check it and the inventory, and build the
    /// invocation. Touches the filesystem only through `fs`.
    pub fn prepare(&self, plan: &RunPlan) -> Result<RunInvocation> {
        let program = match &plan.executable {
            ExecutableSource::Explicit(path) => {
                debug!(path = ?path, "using configured executable");
                path.clone()
            }
            ExecutableSource::Search { name, resolver } => resolver.resolve(self.fs, name)?,
        };

        ensure_runnable(self.fs, "executable", &program)?;
        ensure_runnable(self.fs, "inventory", &plan.options.inventory)?;

        Ok(invocation::build(program, &plan.options))
    }

    /// Launch a prepared invocation and stream its output into `sink`.
    pub async fn execute(
        &self,
        invocation: &RunInvocation,
        sink: &mut dyn LogSink,
    ) -> Result<RunOutcome> {
        let start_time = Local::now();
        info!(command = %invocation, "launching pull");

        let mut process = self.launcher.launch(invocation)?;
        let summary = classify::consume(process.as_mut(), sink, start_time).await?;
        let status = process.wait().await?;

        info!(status = %status, success = status.success(), "pull process exited");

        Ok(RunOutcome {
            invocation: invocation.clone(),
            status,
            summary,
        })
    }

    pub async fn run(&self, plan: &RunPlan, sink: &mut dyn LogSink) -> Result<RunOutcome> {
        let invocation = self.prepare(plan)?;
        self.execute(&invocation, sink).await
    }
}
