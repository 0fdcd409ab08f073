//! Integration tests for structured exit codes.
//!
//! These tests verify that forge-config returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{forge_config_cmd, write_config};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_success_returns_exit_code_0() {
    let dir = TempDir::new().unwrap();
    forge_config_cmd(dir.path()).arg("show").assert().code(0);
}

#[test]
fn test_malformed_config_returns_exit_code_2() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "[profile.default]\nsrc = \n");

    forge_config_cmd(dir.path())
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("foundry.toml"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_missing_config_override_returns_exit_code_2() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");

    forge_config_cmd(dir.path())
        .arg("--config-path")
        .arg(&missing)
        .arg("show")
        .assert()
        .code(2);
}

#[test]
fn test_missing_variable_returns_exit_code_3() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "[rpc_endpoints]\ngoerli = \"https://eth-goerli.example/v2/${GOERLI_API_KEY}\"\n",
    );

    forge_config_cmd(dir.path())
        .env_remove("GOERLI_API_KEY")
        .args(["rpc", "goerli"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("GOERLI_API_KEY"))
        .stderr(predicate::str::contains("rpc_endpoints.goerli"));
}

#[test]
fn test_invalid_env_value_returns_exit_code_4() {
    let dir = TempDir::new().unwrap();

    forge_config_cmd(dir.path())
        .env("FOUNDRY_OPTIMIZER_RUNS", "abc")
        .arg("show")
        .assert()
        .code(4);
}

#[test]
fn test_unknown_key_returns_exit_code_5() {
    let dir = TempDir::new().unwrap();

    forge_config_cmd(dir.path())
        .args(["get", "no_such_key"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("no_such_key"));
}

#[test]
fn test_unknown_alias_returns_exit_code_5() {
    let dir = TempDir::new().unwrap();

    forge_config_cmd(dir.path())
        .args(["rpc", "mainnet"])
        .assert()
        .code(5);

    forge_config_cmd(dir.path())
        .args(["etherscan", "mainnet"])
        .assert()
        .code(5);
}
