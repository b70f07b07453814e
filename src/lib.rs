// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod plan;
pub mod types;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::resolve_config;
use crate::engine::Sequencer;
use crate::exec::RealExecutorBackend;
use crate::plan::Plan;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - root + config resolution
/// - glob expansion into a plan
/// - the fail-fast sequencer over the real process executor
///
/// Returns the exit status the process should end with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let root = resolve_root(args.root.as_deref())?;
    let cfg = resolve_config(args.config.as_deref(), &root)?;
    let plan = Plan::build(&cfg, &root)?;

    if args.dry_run {
        print_dry_run(&plan, &mut io::stdout().lock())?;
        return Ok(0);
    }

    let executor = RealExecutorBackend::new(plan.root().to_path_buf());
    let report = Sequencer::new(plan, executor).run().await?;
    Ok(report.exit_code())
}

/// Directory that globs are expanded against and tools run in.
fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("root {:?} is not a directory", dir);
            }
            Ok(dir.to_path_buf())
        }
        None => std::env::current_dir().context("reading current working directory"),
    }
}

/// Print every invocation of the plan in order, without running anything.
pub fn print_dry_run(plan: &Plan, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "checkseq dry-run")?;
    writeln!(out, "  root = {}", plan.root().display())?;
    writeln!(out)?;

    writeln!(out, "invocations ({}):", plan.len())?;
    for invocation in plan.invocations() {
        writeln!(
            out,
            "  {:>2}. {} [{}]",
            invocation.index, invocation.tool, invocation.target
        )?;
        writeln!(out, "      cmd: {}", invocation.command_line())?;
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
