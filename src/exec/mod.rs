// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] defines the [`ExecutorBackend`] seam the sequencer talks to,
//!   and the production [`RealExecutorBackend`].
//! - [`command`] spawns one tool with `tokio::process::Command` and maps its
//!   exit into an [`InvocationOutcome`](crate::engine::InvocationOutcome).

pub mod backend;
pub mod command;

pub use backend::{ExecutorBackend, RealExecutorBackend};
pub use command::{exit_code_of, run_invocation};
