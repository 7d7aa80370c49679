// src/engine/preconditions.rs

use std::path::Path;

use tracing::debug;

use crate::errors::{PreconditionFailure, PreconditionKind, PullError, Result};
use crate::fs::FileSystem;

/// Check that `path` is an existing, executable regular file.
///
/// The first failing check is reported; `role` names the file in the error.
pub fn ensure_runnable(fs: &dyn FileSystem, role: &'static str, path: &Path) -> Result<()> {
    let kind = if !fs.exists(path) {
        Some(PreconditionKind::Missing)
    } else if !fs.is_file(path) {
        Some(PreconditionKind::NotRegularFile)
    } else if !fs.is_executable(path) {
        Some(PreconditionKind::NotExecutable)
    } else {
        None
    };

    match kind {
        Some(kind) => Err(PullError::Precondition(PreconditionFailure {
            role,
            path: path.to_path_buf(),
            kind,
        })),
        None => {
            debug!(role, path = ?path, "precondition satisfied");
            Ok(())
        }
    }
}
