use std::error::Error;
use std::fs;

use tempfile::tempdir;

use checkseq::plan::{Plan, expand_pattern, expand_target};
use checkseq::types::UnmatchedGlobBehaviour;
use checkseq_test_utils::builders::ConfigFileBuilder;
use checkseq_test_utils::touch;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn star_matches_one_directory_level_sorted() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "scripts/run_v71_demo.py");
    touch(dir.path(), "scripts/env.py");
    touch(dir.path(), "scripts/notes.txt");
    touch(dir.path(), "scripts/nested/deep.py");

    let paths = expand_pattern(dir.path(), "scripts/*.py", UnmatchedGlobBehaviour::Literal)?;

    assert_eq!(paths, vec!["scripts/env.py", "scripts/run_v71_demo.py"]);
    Ok(())
}

#[test]
fn double_star_recurses() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "src/a.py");
    touch(dir.path(), "src/pkg/b.py");
    touch(dir.path(), "src/pkg/sub/c.py");

    let paths = expand_pattern(dir.path(), "src/**/*.py", UnmatchedGlobBehaviour::Literal)?;

    assert_eq!(paths, vec!["src/a.py", "src/pkg/b.py", "src/pkg/sub/c.py"]);
    Ok(())
}

#[test]
fn hidden_files_need_an_explicit_dot() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "scripts/.hidden.py");
    touch(dir.path(), "scripts/shown.py");

    let plain = expand_pattern(dir.path(), "scripts/*.py", UnmatchedGlobBehaviour::Literal)?;
    assert_eq!(plain, vec!["scripts/shown.py"]);

    let dotted = expand_pattern(dir.path(), "scripts/.*.py", UnmatchedGlobBehaviour::Literal)?;
    assert_eq!(dotted, vec!["scripts/.hidden.py"]);
    Ok(())
}

#[test]
fn unmatched_pattern_passes_through_literally() -> TestResult {
    let dir = tempdir()?;

    let paths = expand_pattern(
        dir.path(),
        "tests/requirements/test/*.py",
        UnmatchedGlobBehaviour::Literal,
    )?;

    assert_eq!(paths, vec!["tests/requirements/test/*.py"]);
    Ok(())
}

#[test]
fn unmatched_pattern_can_be_dropped() -> TestResult {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("scripts"))?;

    let paths = expand_pattern(dir.path(), "scripts/*.py", UnmatchedGlobBehaviour::Drop)?;

    assert!(paths.is_empty());
    Ok(())
}

#[test]
fn literal_paths_are_not_checked() -> TestResult {
    let dir = tempdir()?;

    let paths = expand_pattern(dir.path(), "setup.py", UnmatchedGlobBehaviour::Drop)?;

    assert_eq!(paths, vec!["setup.py"]);
    Ok(())
}

#[test]
fn target_patterns_keep_order_and_drop_repeats() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "b/one.py");
    touch(dir.path(), "a/two.py");

    let patterns = vec!["b/*.py".to_string(), "a/*.py".to_string(), "b/one.py".to_string()];
    let paths = expand_target(dir.path(), &patterns, UnmatchedGlobBehaviour::Literal)?;

    assert_eq!(paths, vec!["b/one.py", "a/two.py"]);
    Ok(())
}

#[test]
fn plan_appends_paths_after_tool_args() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "tests/requirements/test/test_hal_uart.py");
    touch(dir.path(), "tests/requirements/test/test_event_interrupt.py");
    touch(dir.path(), "scripts/env.py");

    let cfg = ConfigFileBuilder::new()
        .with_target("requirement-tests", &["tests/requirements/test/*.py"])
        .with_target("scripts", &["scripts/*.py"])
        .with_tool("isort", "isort", &["--check-only"])
        .with_tool("mypy", "mypy", &[])
        .build();

    let plan = Plan::build(&cfg, dir.path())?;
    let invocations = plan.invocations();

    assert_eq!(invocations.len(), 4);
    assert_eq!(invocations[0].index, 1);
    assert_eq!(invocations[0].program, "isort");
    assert_eq!(
        invocations[0].args,
        vec![
            "--check-only",
            "tests/requirements/test/test_event_interrupt.py",
            "tests/requirements/test/test_hal_uart.py",
        ]
    );
    assert_eq!(invocations[1].tool, "mypy");
    assert_eq!(invocations[1].target, "requirement-tests");
    assert_eq!(invocations[3].command_line(), "mypy scripts/env.py");
    assert_eq!(invocations[3].index, 4);
    Ok(())
}

#[test]
fn dot_component_only_admits_hidden_names_at_its_own_depth() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), ".cfg/.secret.py");
    touch(dir.path(), ".cfg/ok.py");
    touch(dir.path(), "visible/ok.py");

    let paths = expand_pattern(dir.path(), ".*/*.py", UnmatchedGlobBehaviour::Literal)?;

    assert_eq!(paths, vec![".cfg/ok.py"]);
    Ok(())
}

#[test]
fn double_star_does_not_enter_hidden_directories() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "src/.cache/stale.py");
    touch(dir.path(), "src/pkg/mod.py");

    let paths = expand_pattern(dir.path(), "src/**/*.py", UnmatchedGlobBehaviour::Literal)?;

    assert_eq!(paths, vec!["src/pkg/mod.py"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn star_walks_through_symlinked_directories() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "real/x.py");
    fs::create_dir_all(dir.path().join("pkgs"))?;
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("pkgs/link"))?;

    let paths = expand_pattern(dir.path(), "pkgs/*/x.py", UnmatchedGlobBehaviour::Drop)?;

    assert_eq!(paths, vec!["pkgs/link/x.py"]);
    Ok(())
}

#[test]
fn doubled_separators_are_kept_in_matches() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "scripts/env.py");

    let paths = expand_pattern(dir.path(), "scripts//*.py", UnmatchedGlobBehaviour::Drop)?;

    assert_eq!(paths, vec!["scripts//env.py"]);
    Ok(())
}

#[test]
fn trailing_slash_matches_directories_only() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "pkg/mod.py");
    touch(dir.path(), "setup.py");

    let paths = expand_pattern(dir.path(), "*/", UnmatchedGlobBehaviour::Drop)?;

    assert_eq!(paths, vec!["pkg/"]);
    Ok(())
}

#[test]
fn drop_mode_plan_passes_only_tool_args_for_empty_targets() -> TestResult {
    let dir = tempdir()?;
    touch(dir.path(), "scripts/env.py");

    let cfg = ConfigFileBuilder::new()
        .unmatched_glob(UnmatchedGlobBehaviour::Drop)
        .with_target("requirement-tests", &["tests/requirements/test/*.py"])
        .with_target("scripts", &["scripts/*.py"])
        .with_tool("black", "black", &["--check"])
        .build();

    let plan = Plan::build(&cfg, dir.path())?;
    let args: Vec<&[String]> = plan.invocations().iter().map(|i| i.args.as_slice()).collect();

    assert_eq!(args.len(), 2);
    assert_eq!(args[0], ["--check".to_string()]);
    assert_eq!(args[1], ["--check".to_string(), "scripts/env.py".to_string()]);
    Ok(())
}

#[test]
fn repeated_matches_across_many_patterns_are_kept_once() -> TestResult {
    let dir = tempdir()?;
    for i in 0..50 {
        touch(dir.path(), &format!("src/m{i:02}.py"));
    }

    let patterns: Vec<String> = (0..5).map(|_| "src/*.py".to_string()).collect();
    let paths = expand_target(dir.path(), &patterns, UnmatchedGlobBehaviour::Literal)?;

    assert_eq!(paths.len(), 50);
    assert_eq!(paths.first().map(String::as_str), Some("src/m00.py"));
    assert_eq!(paths.last().map(String::as_str), Some("src/m49.py"));
    Ok(())
}
