use proptest::prelude::*;

use checkseq::engine::{InvocationOutcome, Sequencer};
use checkseq::plan::Plan;
use checkseq_test_utils::builders::python_checks_with_targets;
use checkseq_test_utils::fake_executor::ScriptedExecutor;

fn run_blocking(plan: Plan, executor: ScriptedExecutor) -> i32 {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async { Sequencer::new(plan, executor).run().await.unwrap().exit_code() })
}

proptest! {
    #[test]
    fn first_failure_wins(
        targets in 1..4usize,
        codes in proptest::collection::vec(prop_oneof![3 => Just(0i32), 1 => 1..=255i32], 16),
    ) {
        let cfg = python_checks_with_targets(targets);
        let plan = Plan::build(&cfg, ".").unwrap();
        let n = plan.len();

        let mut executor = ScriptedExecutor::new();
        for (i, code) in codes.iter().take(n).enumerate() {
            executor = executor.with_outcome(i + 1, InvocationOutcome::from_exit_code(*code));
        }
        let observer = executor.clone();

        let exit_code = run_blocking(plan, executor);

        let first_failure = codes.iter().take(n).position(|c| *c != 0);
        match first_failure {
            None => {
                prop_assert_eq!(exit_code, 0);
                prop_assert_eq!(observer.executed_indices(), (1..=n).collect::<Vec<_>>());
            }
            Some(k) => {
                prop_assert_eq!(exit_code, codes[k]);
                prop_assert_eq!(observer.executed_indices(), (1..=k + 1).collect::<Vec<_>>());
            }
        }
    }
}
