// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [pull]
/// inventory_script = "/etc/ansible/inventory.sh"
/// destination = "/var/lib/pullwrap/checkout"
/// wait_interval = 300
/// log_dir = "/var/log/pullwrap"
///
/// [executable]
/// name = "ansible-pull"
/// local_dir = "/usr/local/bin"
///
/// [security]
/// require_root = true
/// ```
///
/// All sections are optional and have defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub pull: PullSection,

    #[serde(default)]
    pub executable: ExecutableSection,

    #[serde(default)]
    pub security: SecuritySection,
}

/// Validated configuration. Build it from a [`RawConfigFile`] with
/// `ConfigFile::try_from`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub pull: PullSection,
    pub executable: ExecutableSection,
    pub security: SecuritySection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        pull: PullSection,
        executable: ExecutableSection,
        security: SecuritySection,
    ) -> Self {
        Self {
            pull,
            executable,
            security,
        }
    }
}

/// `[pull]` section: paths and timings handed to the pull command.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PullSection {
    /// Inventory script passed with `-i`. Must be executable.
    #[serde(default = "default_inventory_script")]
    pub inventory_script: PathBuf,

    /// Checkout directory passed with `-d`. Deleted by `--refresh`.
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Upper bound in seconds for the randomized start delay (`-s`).
    #[serde(default = "default_wait_interval")]
    pub wait_interval: u64,

    /// Directory receiving `pull.log` and `summary.log`.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_inventory_script() -> PathBuf {
    PathBuf::from("/etc/ansible/inventory.sh")
}

fn default_destination() -> PathBuf {
    PathBuf::from("/var/lib/pullwrap/checkout")
}

fn default_wait_interval() -> u64 {
    300
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("/var/log/pullwrap")
}

impl Default for PullSection {
    fn default() -> Self {
        Self {
            inventory_script: default_inventory_script(),
            destination: default_destination(),
            wait_interval: default_wait_interval(),
            log_dir: default_log_dir(),
        }
    }
}

/// `[executable]` section: how to find the pull command.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutableSection {
    /// File name searched for when `path` is not set.
    #[serde(default = "default_executable_name")]
    pub name: String,

    /// Directory searched before anything on `PATH`.
    #[serde(default = "default_local_dir")]
    pub local_dir: PathBuf,

    /// Explicit executable; skips resolution entirely.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_executable_name() -> String {
    "ansible-pull".to_string()
}

fn default_local_dir() -> PathBuf {
    PathBuf::from("/usr/local/bin")
}

impl Default for ExecutableSection {
    fn default() -> Self {
        Self {
            name: default_executable_name(),
            local_dir: default_local_dir(),
            path: None,
        }
    }
}

/// `[security]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecuritySection {
    /// Refuse to run unless the effective uid is 0.
    #[serde(default = "default_require_root")]
    pub require_root: bool,
}

fn default_require_root() -> bool {
    true
}

impl Default for SecuritySection {
    fn default() -> Self {
        Self {
            require_root: default_require_root(),
        }
    }
}
