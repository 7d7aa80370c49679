// src/resolve.rs

//! Locate the pull executable.
//!
//! Search order is the configured local directory, then every entry of the
//! search path in order. The first regular file with the right name wins.

use std::ffi::OsStr;
use std::path::PathBuf;

use tracing::{debug, trace};

use crate::errors::{PullError, Result};
use crate::fs::FileSystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableResolver {
    dirs: Vec<PathBuf>,
}

impl ExecutableResolver {
    /// Build a resolver from the local directory and a raw search path
    /// value in the platform's `PATH` format (e.g. the contents of `PATH`).
    ///
    /// `None` is treated as an empty search path. Empty entries are skipped.
    pub fn new(local_dir: impl Into<PathBuf>, search_path: Option<&OsStr>) -> Self {
        let mut dirs = vec![local_dir.into()];

        if let Some(raw) = search_path {
            dirs.extend(
                std::env::split_paths(raw).filter(|entry| !entry.as_os_str().is_empty()),
            );
        }

        Self { dirs }
    }

    /// Directories in search order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Return `dir/name` for the first directory that holds a regular file
    /// called `name`.
    ///
    /// Executability is deliberately not checked here; the orchestrator
    /// validates the result before launch.
    pub fn resolve(&self, fs: &dyn FileSystem, name: &str) -> Result<PathBuf> {
        for dir in &self.dirs {
            let candidate = dir.join(name);
            trace!(candidate = ?candidate, "checking for executable");
            if fs.is_file(&candidate) {
                debug!(path = ?candidate, "resolved executable");
                return Ok(candidate);
            }
        }

        Err(PullError::Resolution {
            name: name.to_string(),
            searched: self.dirs.len(),
        })
    }
}
