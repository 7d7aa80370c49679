// src/lib.rs

pub mod classify;
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod housekeeping;
pub mod invocation;
pub mod logging;
pub mod privilege;
pub mod resolve;
pub mod sink;

use std::ffi::OsStr;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::engine::{ExecutableSource, PullRunner, RunPlan};
use crate::errors::Result;
use crate::exec::{ProcessLauncher, TokioLauncher};
use crate::fs::{FileSystem, RealFileSystem};
use crate::invocation::{PullOptions, RunInvocation};
use crate::resolve::ExecutableResolver;
use crate::sink::FileLogSink;

/// Host facilities a run depends on. `run` fills this with the real ones.
pub struct RunEnv<'a> {
    pub fs: &'a dyn FileSystem,
    pub launcher: &'a dyn ProcessLauncher,
    /// Raw `PATH` value, read once by the caller.
    pub search_path: Option<&'a OsStr>,
    pub privilege_check: fn() -> Result<()>,
}

/// High-level entry point used by `main.rs`.
///
/// Returns the exit code the wrapper should exit with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let fs = RealFileSystem;
    let launcher = TokioLauncher;
    let search_path = std::env::var_os("PATH");

    let env = RunEnv {
        fs: &fs,
        launcher: &launcher,
        search_path: search_path.as_deref(),
        privilege_check: privilege::ensure_root,
    };

    run_with(&args, &env).await
}

/// This wires together:
/// - config loading and the optional root check
/// - executable resolution and file validation
/// - refresh mode
/// - the pull itself, logged to `[pull].log_dir`
///
/// Nothing is deleted, created or launched before validation passes, and a
/// dry run stops right after it.
pub async fn run_with(args: &CliArgs, env: &RunEnv<'_>) -> Result<i32> {
    let cfg = config::load_effective(env.fs, args.config.as_deref())?;

    if cfg.security.require_root && !args.dry_run {
        (env.privilege_check)()?;
    }

    let plan = RunPlan {
        executable: executable_source(args, &cfg, env.search_path),
        options: PullOptions::assemble(args, &cfg, env.fs),
    };

    let runner = PullRunner::new(env.fs, env.launcher);
    let invocation = runner.prepare(&plan)?;

    if args.dry_run {
        print_dry_run(&invocation, &cfg);
        return Ok(0);
    }

    if args.refresh {
        housekeeping::refresh_destination(env.fs, &plan.options.destination)?;
    }

    let mut sink = FileLogSink::open(&cfg.pull.log_dir)?;
    let outcome = runner.execute(&invocation, &mut sink).await?;

    info!(
        exit_code = outcome.status.exit_code(),
        recap = outcome.summary.recap_line.as_deref().unwrap_or("-"),
        "run complete"
    );

    Ok(outcome.status.exit_code())
}

/// Explicit `--executable` wins over `[executable].path`; otherwise search
/// the local dir and then `search_path`.
pub fn executable_source(
    args: &CliArgs,
    cfg: &ConfigFile,
    search_path: Option<&OsStr>,
) -> ExecutableSource {
    if let Some(path) = args.executable.clone().or_else(|| cfg.executable.path.clone()) {
        return ExecutableSource::Explicit(path);
    }

    let resolver = ExecutableResolver::new(&cfg.executable.local_dir, search_path);
    debug!(dirs = ?resolver.dirs(), "executable search order");

    ExecutableSource::Search {
        name: cfg.executable.name.clone(),
        resolver,
    }
}

/// Print what would be run.
fn print_dry_run(invocation: &RunInvocation, cfg: &ConfigFile) {
    println!("pullwrap dry-run");
    println!("  executable: {}", invocation.program().display());
    println!("  log_dir: {}", cfg.pull.log_dir.display());
    println!();
    println!("arguments ({}):", invocation.args().len());
    for arg in invocation.args() {
        println!("  {}", arg.to_string_lossy());
    }

    debug!("dry-run complete (no execution)");
}
