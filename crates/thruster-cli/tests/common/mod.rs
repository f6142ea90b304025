//! Shared helpers for `thruster-cli` integration tests.

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

/// Path to a file under the workspace fixtures directory.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

/// The CLI binary with a quiet log filter, no colors and no ambient config.
pub fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("thruster-cli");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("THRUSTER_SWEEP_CONFIG");
    cmd
}
