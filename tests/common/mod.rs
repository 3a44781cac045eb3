#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Fresh data directory for one test; dropped (and removed) with the guard.
pub fn setup_home() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// The CLI binary in script mode, isolated to `home`.
pub fn script_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pocket_ledger_cli").expect("binary built");
    cmd.env("POCKET_LEDGER_CLI_SCRIPT", "1")
        .env("POCKET_LEDGER_HOME", home)
        .env_remove("POCKET_LEDGER_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}
