// src/exec/command.rs

use std::future::Future;
use std::io;
use std::path::Path;
use std::process::ExitStatus;

use tokio::process::{Child, Command};
use tracing::{debug, error, info, warn};

use crate::engine::InvocationOutcome;
use crate::errors::Result;
use crate::plan::Invocation;

/// Status a shell reports when the program does not exist.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;
/// Status a shell reports when the program exists but cannot be executed.
pub const NOT_EXECUTABLE_EXIT_CODE: i32 = 126;

/// Run one invocation in `root` and wait for it.
///
/// stdout/stderr are inherited so tool diagnostics reach the console
/// untouched. Ctrl-C kills the child and yields `Interrupted`.
pub async fn run_invocation(root: &Path, invocation: &Invocation) -> Result<InvocationOutcome> {
    info!(
        index = invocation.index,
        tool = %invocation.tool,
        target = %invocation.target,
        "starting tool process"
    );

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .current_dir(root)
        .kill_on_drop(true);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            let code = spawn_failure_exit_code(&err);
            error!(
                tool = %invocation.tool,
                program = %invocation.program,
                error = %err,
                exit_code = code,
                "failed to start tool"
            );
            return Ok(InvocationOutcome::Failed(code));
        }
    };

    wait_or_interrupt(&mut child, &invocation.tool, tokio::signal::ctrl_c()).await
}

/// Wait for `child`, killing it if `interrupt` fires first.
///
/// If `interrupt` fails (the Ctrl-C listener could not be installed) the
/// child is left alone and simply awaited.
pub(crate) async fn wait_or_interrupt<F>(
    child: &mut Child,
    tool: &str,
    interrupt: F,
) -> Result<InvocationOutcome>
where
    F: Future<Output = io::Result<()>>,
{
    let interrupted = async {
        if let Err(err) = interrupt.await {
            warn!(error = %err, "failed to listen for Ctrl+C; tool cannot be interrupted");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        status = child.wait() => {
            let status = status?;
            let code = exit_code_of(status);
            debug!(tool = %tool, exit_code = code, "tool process exited");
            Ok(InvocationOutcome::from_exit_code(code))
        }
        _ = interrupted => {
            warn!(tool = %tool, "interrupted, stopping tool");
            if let Err(err) = child.kill().await {
                warn!(tool = %tool, error = %err, "failed to kill tool process");
            }
            Ok(InvocationOutcome::Interrupted)
        }
    }
}

/// Map an exit status to the number a shell would report.
///
/// A child killed by signal `N` reports `128 + N` on unix.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

fn spawn_failure_exit_code(err: &io::Error) -> i32 {
    match err.kind() {
        io::ErrorKind::NotFound => NOT_FOUND_EXIT_CODE,
        _ => NOT_EXECUTABLE_EXIT_CODE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_errors_map_like_a_shell() {
        let not_found = io::Error::from(io::ErrorKind::NotFound);
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(spawn_failure_exit_code(&not_found), 127);
        assert_eq!(spawn_failure_exit_code(&denied), 126);
    }

    #[cfg(unix)]
    #[test]
    fn signal_status_maps_to_128_plus_signal() {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait status for "terminated by SIGKILL".
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_code_of(status), 137);
        let status = ExitStatus::from_raw(3 << 8);
        assert_eq!(exit_code_of(status), 3);
    }

    #[cfg(unix)]
    fn spawn_sh(script: &str) -> Child {
        Command::new("sh")
            .arg("-c")
            .arg(script)
            .kill_on_drop(true)
            .spawn()
            .unwrap()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn broken_listener_keeps_waiting_for_the_tool() {
        let mut child = spawn_sh("exit 5");
        let listener = async { Err(io::Error::other("signals unavailable")) };

        let outcome = wait_or_interrupt(&mut child, "sh", listener).await.unwrap();

        assert_eq!(outcome, InvocationOutcome::Failed(5));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn interrupt_kills_the_tool() {
        let mut child = spawn_sh("sleep 30");
        let started = std::time::Instant::now();

        let outcome = wait_or_interrupt(&mut child, "sh", async { Ok(()) })
            .await
            .unwrap();

        assert_eq!(outcome, InvocationOutcome::Interrupted);
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
    }
}
