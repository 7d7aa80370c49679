// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

/// Command-line arguments for `pullwrap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pullwrap",
    version,
    about = "Run ansible-pull and keep a verbose log plus a one-line run summary.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Falls back to `PULLWRAP_CONFIG`, then `/etc/pullwrap/pullwrap.toml`.
    #[arg(long, value_name = "PATH", env = "PULLWRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pull executable to run. Skips the search in the local dir and `PATH`.
    #[arg(long, value_name = "PATH")]
    pub executable: Option<PathBuf>,

    /// Inventory script (overrides `[pull].inventory_script`).
    #[arg(long, value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Checkout directory (overrides `[pull].destination`).
    #[arg(long, value_name = "PATH")]
    pub destination: Option<PathBuf>,

    /// Repository URL to pull playbooks from.
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// Branch, tag or commit to check out.
    #[arg(long, value_name = "BRANCH", default_value = "master")]
    pub branch: String,

    /// Playbook to run, relative to the checkout.
    #[arg(long, value_name = "PATH", default_value = "local.yml")]
    pub playbook: PathBuf,

    /// SSH private key for the repository. Ignored if the file is missing.
    #[arg(long, value_name = "PATH")]
    pub ssh_key: Option<PathBuf>,

    /// Verbosity passed through to the pull command (3 => `-vvv`).
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub pull_verbosity: u8,

    /// Accept unknown SSH host keys for the repository.
    #[arg(long = "no-strict-host-key-checking", action = ArgAction::SetFalse)]
    pub strict_host_key_checking: bool,

    /// Sleep a random interval (up to `[pull].wait_interval`) before pulling.
    #[arg(long)]
    pub wait: bool,

    /// Only run plays and tasks tagged with these values.
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Skip plays and tasks tagged with these values.
    #[arg(long, value_name = "TAGS")]
    pub skip_tags: Option<String>,

    /// Delete the checkout directory before pulling.
    #[arg(long)]
    pub refresh: bool,

    /// Mirror every line of pull output to the console.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// Takes precedence over `--verbose`, `--quiet` and `PULLWRAP_LOG`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and validate everything, print the command, but don't run it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
