//! Tests for the configuration resolver.
//!
//! Responsibilities:
//! - Test profile selection and inheritance from files.
//! - Test environment overlay precedence and prefix collisions.
//! - Test eager and lazy interpolation through the resolver.
//!
//! Does NOT handle:
//! - Value coercion rules (tested in coerce.rs).
//! - File search mechanics (tested in locate.rs).
//!
//! Invariants:
//! - Tests pass an explicit `Env` snapshot and never touch the process environment.
//! - The home directory is cleared so a developer's global config cannot leak in.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::env::Env;
use crate::resolver::ConfigResolver;

pub mod profile_tests;

/// Writes `foundry.toml` into `dir` and returns its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("foundry.toml");
    fs::write(&path, content).unwrap();
    path
}

/// A resolver rooted at `dir` with no global config fallback.
pub fn resolver_at(dir: &Path, vars: &[(&str, &str)]) -> ConfigResolver {
    let env: Env = vars.iter().copied().collect();
    ConfigResolver::new(env)
        .with_root(dir)
        .with_home(None)
}
