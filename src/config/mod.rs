// src/config/mod.rs

//! Plan configuration for checkseq.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the built-in plan (`model.rs`).
//! - Locate and load a config file from disk (`loader.rs`).
//! - Validate basic invariants before anything runs (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, resolve_config};
pub use model::{ConfigFile, ConfigSection, RawConfigFile, TargetConfig, ToolConfig};
