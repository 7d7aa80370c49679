// src/housekeeping.rs

//! Destructive filesystem steps that run before a pull.

use std::path::Path;

use tracing::{debug, warn};

use crate::errors::Result;
use crate::fs::FileSystem;

/// Delete the checkout directory for `--refresh`.
///
/// The intent is logged before anything is removed. A missing directory is
/// not an error; any other failure is returned unchanged.
pub fn refresh_destination(fs: &dyn FileSystem, destination: &Path) -> Result<()> {
    if !fs.exists(destination) {
        debug!(destination = ?destination, "refresh requested but destination does not exist");
        return Ok(());
    }

    warn!(destination = ?destination, "refresh requested; deleting checkout directory");
    fs.remove_dir_all(destination)?;
    debug!(destination = ?destination, "checkout directory deleted");

    Ok(())
}
