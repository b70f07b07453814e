// src/errors.rs

//! Crate-wide error type.
//!
//! A tool exiting non-zero is not an error here; it is an
//! [`InvocationOutcome`](crate::engine::InvocationOutcome). These variants
//! cover everything that stops a plan from being built at all.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckseqError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckseqError>;
