// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PullError, Result};
use crate::fs::FileSystem;

/// Environment variable consulted when `--config` is not given.
pub const CONFIG_ENV_VAR: &str = "PULLWRAP_CONFIG";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(fs, &path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Load the configuration for this process.
///
/// - An explicit path (from `--config` or `PULLWRAP_CONFIG`) must exist.
/// - The default path is optional; built-in defaults are used when it is
///   missing.
pub fn load_effective(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        if !fs.is_file(path) {
            return Err(PullError::Config(format!(
                "config file {:?} does not exist",
                path
            )));
        }
        return load_and_validate(fs, path);
    }

    let path = default_config_path();
    if fs.is_file(&path) {
        load_and_validate(fs, &path)
    } else {
        debug!(path = ?path, "no config file at default location; using built-in defaults");
        ConfigFile::try_from(RawConfigFile::default())
    }
}

/// Default config location.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("/etc/pullwrap/pullwrap.toml")
}
