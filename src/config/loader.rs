// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{CheckseqError, Result};

/// File name looked up in the root directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "Checkseq.toml";

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| CheckseqError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Pick the configuration for a run.
///
/// - An explicit path must exist and be valid.
/// - Otherwise `<root>/Checkseq.toml` is used if present.
/// - Otherwise the built-in plan.
pub fn resolve_config(explicit: Option<&Path>, root: &Path) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        debug!(path = ?path, "loading explicit config");
        return load_and_validate(path);
    }

    let candidate = default_config_path(root);
    if candidate.is_file() {
        debug!(path = ?candidate, "loading discovered config");
        return load_and_validate(&candidate);
    }

    debug!("no config file found, using built-in plan");
    Ok(ConfigFile::builtin())
}

/// `Checkseq.toml` inside the given root directory.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONFIG_FILE)
}
