// src/config/validate.rs

use std::path::Path;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PullError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = PullError;

    fn try_from(mut raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        // The name is joined onto search directories as-is.
        raw.executable.name = raw.executable.name.trim().to_string();

        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.pull, raw.executable, raw.security))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_pull_section(cfg)?;
    validate_executable_section(cfg)?;
    Ok(())
}

fn validate_pull_section(cfg: &RawConfigFile) -> Result<()> {
    let pull = &cfg.pull;

    ensure_non_empty_path("[pull].inventory_script", &pull.inventory_script)?;
    ensure_non_empty_path("[pull].destination", &pull.destination)?;
    ensure_non_empty_path("[pull].log_dir", &pull.log_dir)?;

    if pull.wait_interval == 0 {
        return Err(PullError::Config(
            "[pull].wait_interval must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}

fn validate_executable_section(cfg: &RawConfigFile) -> Result<()> {
    let name = cfg.executable.name.as_str();

    if name.is_empty() {
        return Err(PullError::Config(
            "[executable].name must not be empty".to_string(),
        ));
    }

    // A name with a separator would make `dir.join(name)` escape the
    // searched directory.
    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return Err(PullError::Config(format!(
            "[executable].name '{}' must be a bare file name; use [executable].path for a full path",
            name
        )));
    }

    if let Some(path) = &cfg.executable.path {
        ensure_non_empty_path("[executable].path", path)?;
    }

    Ok(())
}

fn ensure_non_empty_path(field: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(PullError::Config(format!("{} must not be empty", field)));
    }
    Ok(())
}
