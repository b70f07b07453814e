// src/engine/report.rs

use std::time::Duration;

use tracing::{info, warn};

use crate::engine::sequencer::InvocationOutcome;
use crate::plan::Invocation;

/// What happened to one invocation that actually ran.
#[derive(Debug, Clone)]
pub struct InvocationRecord {
    pub invocation: Invocation,
    pub outcome: InvocationOutcome,
    pub elapsed: Duration,
}

/// Summary of a sequence run.
///
/// `records` holds only the invocations that ran; anything after the first
/// failure is counted in [`SequenceReport::skipped`].
#[derive(Debug, Clone)]
pub struct SequenceReport {
    planned: usize,
    records: Vec<InvocationRecord>,
}

impl SequenceReport {
    pub fn new(planned: usize, records: Vec<InvocationRecord>) -> Self {
        Self { planned, records }
    }

    pub fn records(&self) -> &[InvocationRecord] {
        &self.records
    }

    pub fn planned(&self) -> usize {
        self.planned
    }

    pub fn ran(&self) -> usize {
        self.records.len()
    }

    pub fn skipped(&self) -> usize {
        self.planned.saturating_sub(self.records.len())
    }

    /// The invocation that ended the run early, if any.
    pub fn failure(&self) -> Option<&InvocationRecord> {
        self.records.iter().find(|r| !r.outcome.is_success())
    }

    pub fn all_passed(&self) -> bool {
        self.failure().is_none()
    }

    /// 0 if everything passed, otherwise the first failing status.
    pub fn exit_code(&self) -> i32 {
        self.failure().map_or(0, |r| r.outcome.exit_code())
    }

    pub fn total_elapsed(&self) -> Duration {
        self.records.iter().map(|r| r.elapsed).sum()
    }

    pub(crate) fn log_summary(&self) {
        match self.failure() {
            None => info!(
                ran = self.ran(),
                elapsed_ms = self.total_elapsed().as_millis() as u64,
                "all invocations passed"
            ),
            Some(failed) => warn!(
                ran = self.ran(),
                skipped = self.skipped(),
                failed = %failed.invocation,
                exit_code = failed.outcome.exit_code(),
                "check sequence stopped"
            ),
        }
    }
}
