//! Shared test utilities for es-manager and es-logs integration tests.
//!
//! Responsibilities:
//! - Provide hermetic command factories that prevent dotenv loading.
//! - Ensure a consistent environment (password set, host cleared).
//!
//! Invariants / Assumptions:
//! - `ELASTIC_PASSWORD` is set to "test-password" unless removed by the test.
//! - `NO_COLOR` is cleared so color behaviour is deterministic.

use assert_cmd::Command;

#[allow(unused_imports)]
pub use es_client::testing::load_fixture;

/// Basic auth header value for `elastic:test-password`.
#[allow(dead_code)]
pub const TEST_AUTH_HEADER: &str = "Basic ZWxhc3RpYzp0ZXN0LXBhc3N3b3Jk";

fn hermetic(mut cmd: Command) -> Command {
    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("ELASTIC_PASSWORD", "test-password");

    // Clear potential host leakage
    cmd.env_remove("ES_HOST")
        .env_remove("ES_TIMEOUT")
        .env_remove("ES_SKIP_VERIFY")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `es-manager` command.
#[allow(dead_code)]
pub fn es_manager_cmd() -> Command {
    hermetic(assert_cmd::cargo::cargo_bin_cmd!("es-manager"))
}

/// Returns a hermetic `es-logs` command.
#[allow(dead_code)]
pub fn es_logs_cmd() -> Command {
    hermetic(assert_cmd::cargo::cargo_bin_cmd!("es-logs"))
}

/// Returns a hermetic `es-manager` command pointed at `host`.
#[allow(dead_code)]
pub fn es_manager_cmd_with_host(host: &str) -> Command {
    let mut cmd = es_manager_cmd();
    cmd.env("ES_HOST", host);
    cmd
}

/// Returns a hermetic `es-logs` command pointed at `host`.
#[allow(dead_code)]
pub fn es_logs_cmd_with_host(host: &str) -> Command {
    let mut cmd = es_logs_cmd();
    cmd.env("ES_HOST", host);
    cmd
}
