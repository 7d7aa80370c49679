// src/errors.rs

//! Crate-wide error type.
//!
//! Every fatal condition of a pull run maps to one variant here. None of
//! them are retried; the binary prints the message and exits non-zero.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PullError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("could not find `{name}` in any of {searched} searched directories")]
    Resolution { name: String, searched: usize },

    #[error("{0}")]
    Precondition(PreconditionFailure),

    #[error("failed to launch {program:?}: {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading subprocess output: {0}")]
    StreamRead(#[source] io::Error),

    #[error("insufficient privileges: {0}")]
    Privilege(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A required file that failed validation before launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionFailure {
    /// What the file is for, e.g. `"executable"` or `"inventory"`.
    pub role: &'static str,
    pub path: PathBuf,
    pub kind: PreconditionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionKind {
    Missing,
    NotRegularFile,
    NotExecutable,
}

impl fmt::Display for PreconditionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            PreconditionKind::Missing => "does not exist",
            PreconditionKind::NotRegularFile => "is not a regular file",
            PreconditionKind::NotExecutable => "is not executable",
        };
        write!(f, "{} {:?} {}", self.role, self.path, what)
    }
}

pub type Result<T> = std::result::Result<T, PullError>;
