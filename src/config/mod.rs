// src/config/mod.rs

//! Configuration loading and validation for pullwrap.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file through the [`FileSystem`](crate::fs::FileSystem)
//!   abstraction (`loader.rs`).
//! - Validate paths and intervals (`validate.rs`).
//!
//! The config is read once at startup and passed by reference from there on.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_effective, load_from_path, CONFIG_ENV_VAR};
pub use model::{ConfigFile, ExecutableSection, PullSection, RawConfigFile, SecuritySection};
