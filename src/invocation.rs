// src/invocation.rs

//! Options for one pull and the argument vector built from them.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::fs::FileSystem;

/// Everything the command builder needs, already merged from CLI and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullOptions {
    pub inventory: PathBuf,
    pub destination: PathBuf,
    pub url: String,
    pub branch: String,
    pub playbook: PathBuf,
    /// Only `Some` when the key file was present at assembly time.
    pub private_key: Option<PathBuf>,
    pub verbosity: u8,
    pub strict_host_key_checking: bool,
    /// `Some(seconds)` when a randomized start delay was requested.
    pub wait_interval: Option<u64>,
    pub tags: Option<String>,
    pub skip_tags: Option<String>,
}

impl PullOptions {
    /// Merge CLI flags over config values.
    ///
    /// The private key is dropped (with a debug log) when it is not a regular
    /// file, so the builder itself never touches the filesystem.
    pub fn assemble(args: &CliArgs, cfg: &ConfigFile, fs: &dyn FileSystem) -> Self {
        let private_key = args.ssh_key.as_ref().and_then(|key| {
            if fs.is_file(key) {
                Some(key.clone())
            } else {
                debug!(key = ?key, "ssh key not found; omitting --private-key");
                None
            }
        });

        Self {
            inventory: args
                .inventory
                .clone()
                .unwrap_or_else(|| cfg.pull.inventory_script.clone()),
            destination: args
                .destination
                .clone()
                .unwrap_or_else(|| cfg.pull.destination.clone()),
            url: args.url.clone(),
            branch: args.branch.clone(),
            playbook: args.playbook.clone(),
            private_key,
            verbosity: args.pull_verbosity,
            strict_host_key_checking: args.strict_host_key_checking,
            wait_interval: args.wait.then_some(cfg.pull.wait_interval),
            tags: args.tags.clone(),
            skip_tags: args.skip_tags.clone(),
        }
    }
}

/// The executable plus its fully assembled arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunInvocation {
    program: PathBuf,
    args: Vec<OsString>,
}

impl RunInvocation {
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for RunInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Assemble the argument vector for the pull command.
///
/// The fixed part always comes first and in this order:
/// `--clean --force -i <inventory> -d <dest> -U <url> -C <branch> <playbook>`.
/// Each optional flag after it depends only on its own option.
pub fn build(program: impl Into<PathBuf>, opts: &PullOptions) -> RunInvocation {
    let mut args: Vec<OsString> = vec![
        "--clean".into(),
        "--force".into(),
        "-i".into(),
        opts.inventory.clone().into(),
        "-d".into(),
        opts.destination.clone().into(),
        "-U".into(),
        opts.url.clone().into(),
        "-C".into(),
        opts.branch.clone().into(),
        opts.playbook.clone().into(),
    ];

    if let Some(key) = &opts.private_key {
        args.push("--private-key".into());
        args.push(key.clone().into());
    }

    if let Some(flag) = verbosity_flag(opts.verbosity) {
        args.push(flag.into());
    }

    if !opts.strict_host_key_checking {
        args.push("--accept-host-key".into());
    }

    if let Some(secs) = opts.wait_interval {
        args.push("-s".into());
        args.push(secs.to_string().into());
    }

    if let Some(tags) = &opts.tags {
        args.push("-t".into());
        args.push(tags.clone().into());
    }

    if let Some(skip) = &opts.skip_tags {
        args.push("--skip-tags".into());
        args.push(skip.clone().into());
    }

    RunInvocation {
        program: program.into(),
        args,
    }
}

/// `-v` repeated `level` times; `None` for level 0.
fn verbosity_flag(level: u8) -> Option<String> {
    if level == 0 {
        return None;
    }
    Some(format!("-{}", "v".repeat(usize::from(level))))
}
