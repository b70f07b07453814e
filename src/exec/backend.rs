// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The sequencer talks to an `ExecutorBackend` instead of spawning processes
//! itself. Tests swap in a scripted backend that records calls and returns
//! canned outcomes.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::engine::InvocationOutcome;
use crate::errors::Result;
use crate::plan::Invocation;

use super::command::run_invocation;

/// Trait abstracting how a single invocation is executed.
pub trait ExecutorBackend: Send {
    /// Run the invocation to completion and report how it ended.
    ///
    /// A tool exiting non-zero is an `Ok(InvocationOutcome::Failed(_))`;
    /// `Err` is reserved for the backend itself breaking.
    fn run<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + 'a>>;
}

/// Real executor backend used in production.
///
/// Children run in `root` with inherited stdio.
pub struct RealExecutorBackend {
    root: PathBuf,
}

impl RealExecutorBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn run<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + 'a>> {
        Box::pin(run_invocation(&self.root, invocation))
    }
}
