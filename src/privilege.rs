// src/privilege.rs

use nix::unistd::geteuid;

use crate::errors::{PullError, Result};

/// Fail unless the process runs with an effective uid of 0.
pub fn ensure_root() -> Result<()> {
    let euid = geteuid();
    if euid.is_root() {
        Ok(())
    } else {
        Err(PullError::Privilege(format!(
            "must run as root (effective uid is {euid}); set [security].require_root = false to skip this check"
        )))
    }
}
