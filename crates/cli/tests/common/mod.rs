//! Shared test utilities for forge-config integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Keep host `FOUNDRY_*`/`DAPP_*` variables and the real home directory out of tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `HOME` points at an empty directory so no global config is picked up.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `forge-config` command running in `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every host `FOUNDRY_*` and `DAPP_*` variable is cleared.
/// - `HOME` is `dir`, so `~/.foundry/foundry.toml` cannot leak in.
pub fn forge_config_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("forge-config");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for (key, _) in std::env::vars() {
        if key.starts_with("FOUNDRY_") || key.starts_with("DAPP_") {
            cmd.env_remove(&key);
        }
    }

    cmd.env("HOME", dir).current_dir(dir);
    cmd
}

/// Writes `foundry.toml` into `dir`.
pub fn write_config(dir: &Path, content: &str) {
    std::fs::write(dir.join("foundry.toml"), content).unwrap();
}
