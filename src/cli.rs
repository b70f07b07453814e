// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Running with no arguments reproduces the built-in Python check sequence
//! against the current directory.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `checkseq`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "checkseq",
    version,
    about = "Run code-quality tools over file globs in order, stopping at the first failure.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a plan file (TOML).
    ///
    /// If omitted, `Checkseq.toml` in the root directory is used when it
    /// exists, otherwise the built-in Python check plan.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to expand globs against and run tools in.
    ///
    /// Default: the current working directory.
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CHECKSEQ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load and expand the plan, print every invocation, but run nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
