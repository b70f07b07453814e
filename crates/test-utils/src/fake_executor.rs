use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use checkseq::engine::InvocationOutcome;
use checkseq::errors::Result;
use checkseq::exec::ExecutorBackend;
use checkseq::plan::Invocation;

/// A fake executor that:
/// - records every invocation it is asked to run (in order)
/// - returns a scripted outcome per 1-based index, `Success` otherwise.
#[derive(Clone, Default)]
pub struct ScriptedExecutor {
    outcomes: HashMap<usize, InvocationOutcome>,
    executed: Arc<Mutex<Vec<Invocation>>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the invocation at `index` (1-based) end with `outcome`.
    pub fn with_outcome(mut self, index: usize, outcome: InvocationOutcome) -> Self {
        self.outcomes.insert(index, outcome);
        self
    }

    /// Make the invocation at `index` (1-based) exit with `code`.
    pub fn failing_at(self, index: usize, code: i32) -> Self {
        self.with_outcome(index, InvocationOutcome::from_exit_code(code))
    }

    /// Shared handle to the invocations run so far.
    pub fn executed(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.executed)
    }

    /// Indices of the invocations run so far.
    pub fn executed_indices(&self) -> Vec<usize> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .map(|inv| inv.index)
            .collect()
    }
}

impl ExecutorBackend for ScriptedExecutor {
    fn run<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = Result<InvocationOutcome>> + Send + 'a>> {
        let outcome = self
            .outcomes
            .get(&invocation.index)
            .copied()
            .unwrap_or(InvocationOutcome::Success);
        let executed = Arc::clone(&self.executed);

        Box::pin(async move {
            executed.lock().unwrap().push(invocation.clone());
            Ok(outcome)
        })
    }
}
