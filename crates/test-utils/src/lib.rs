//! Shared helpers for checkseq's integration tests.
//!
//! - [`builders`]: config builders that skip the TOML round trip.
//! - [`fake_executor`]: a scripted backend that records invocations.
//! - file-tree fixtures and tracing setup below.

pub mod builders;
pub mod fake_executor;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Once = Once::new();

/// Send checkseq's logs to the test writer, once per test binary.
///
/// Captured output only shows for failing tests. The filter comes from
/// `RUST_LOG`, defaulting to `checkseq=debug` so invocation decisions are
/// visible when something breaks.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,checkseq=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .init();
    });
}

/// Fail the test if a sequence takes longer than 10 seconds.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(Duration::from_secs(10), f)
        .await
        .expect("check sequence did not finish within 10 seconds")
}

/// Create an empty file at `root/rel`, creating parent directories.
pub fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(&path, "").expect("create file");
    path
}

/// Write a `sh` script at `root/rel` with the given permission bits.
#[cfg(unix)]
pub fn write_script(root: &Path, rel: &str, body: &str, mode: u32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = touch(root, rel);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod script");
    path
}
