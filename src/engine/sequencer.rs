// src/engine/sequencer.rs

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::engine::report::{InvocationRecord, SequenceReport};
use crate::errors::Result;
use crate::exec::ExecutorBackend;
use crate::plan::Plan;

/// Exit status reported for an invocation cut short by Ctrl-C.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Result of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationOutcome {
    Success,
    Failed(i32), // exit code
    Interrupted,
}

impl InvocationOutcome {
    /// Build an outcome from a process exit code.
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            InvocationOutcome::Success
        } else {
            InvocationOutcome::Failed(code)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Success)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            InvocationOutcome::Success => 0,
            InvocationOutcome::Failed(code) => *code,
            InvocationOutcome::Interrupted => INTERRUPTED_EXIT_CODE,
        }
    }
}

/// Fail-fast runner over a plan.
pub struct Sequencer<E: ExecutorBackend> {
    plan: Plan,
    executor: E,
}

impl<E: ExecutorBackend> Sequencer<E> {
    pub fn new(plan: Plan, executor: E) -> Self {
        Self { plan, executor }
    }

    /// Run every invocation in order until one does not succeed.
    ///
    /// No invocation starts before the previous one has finished. Backend
    /// errors abort the run; tool failures do not, they end it.
    pub async fn run(mut self) -> Result<SequenceReport> {
        let planned = self.plan.len();
        info!(planned, root = ?self.plan.root(), "starting check sequence");

        let mut records = Vec::with_capacity(planned);

        for invocation in self.plan.invocations() {
            debug!(
                index = invocation.index,
                tool = %invocation.tool,
                target = %invocation.target,
                cmd = %invocation.command_line(),
                "running invocation"
            );

            let started = Instant::now();
            let outcome = self.executor.run(invocation).await?;
            let elapsed = started.elapsed();

            match outcome {
                InvocationOutcome::Success => info!(
                    index = invocation.index,
                    tool = %invocation.tool,
                    target = %invocation.target,
                    "invocation passed"
                ),
                InvocationOutcome::Failed(code) => warn!(
                    index = invocation.index,
                    tool = %invocation.tool,
                    target = %invocation.target,
                    exit_code = code,
                    "invocation failed"
                ),
                InvocationOutcome::Interrupted => warn!(
                    index = invocation.index,
                    tool = %invocation.tool,
                    "invocation interrupted"
                ),
            }

            records.push(InvocationRecord {
                invocation: invocation.clone(),
                outcome,
                elapsed,
            });

            if !outcome.is_success() {
                break;
            }
        }

        let report = SequenceReport::new(planned, records);
        report.log_summary();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(InvocationOutcome::from_exit_code(0), InvocationOutcome::Success);
        assert_eq!(InvocationOutcome::from_exit_code(4), InvocationOutcome::Failed(4));
        assert_eq!(InvocationOutcome::Failed(4).exit_code(), 4);
        assert_eq!(InvocationOutcome::Interrupted.exit_code(), 130);
        assert!(!InvocationOutcome::Interrupted.is_success());
    }
}
