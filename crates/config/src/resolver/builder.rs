//! Configuration resolver builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigResolver` for layered configuration merging.
//! - Select the active profile.
//! - Run the merge stages and hand back an immutable `ResolvedConfig`.
//!
//! Does NOT handle:
//! - File discovery details (delegated to locate.rs).
//! - Prefix stripping and value coercion (delegated to env.rs and coerce.rs).
//! - Per-alias lazy interpolation (see types/endpoints.rs).
//!
//! Invariants / Assumptions:
//! - Merge order: built-in defaults < global alias tables < file `default` profile
//!   < file active profile < environment overlay.
//! - Every non-default profile is a sparse overlay over `default`, never over siblings.
//! - A profile missing from the file is not an error.
//! - Interpolation runs once, after all stages, so environment-sourced values are
//!   eligible too.
//! - No partial result is returned on error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::{Table, Value};
use tracing::debug;

use super::resolved::ResolvedConfig;
use crate::constants::{
    DEFAULT_PROFILE, ETHERSCAN_KEY, LAZY_INTERPOLATION_KEYS, PROFILE_ENV, ROOT_KEY,
    RPC_ENDPOINTS_KEY,
};
use crate::document::ConfigDocument;
use crate::env::{Env, EnvOverlay};
use crate::error::ConfigError;
use crate::interpolate::interpolate_table;
use crate::locate::ConfigLocator;
use crate::merge::merge_profile;
use crate::types::Config;

/// Resolves a configuration from defaults, the config file and the environment.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    env: Env,
    locator: ConfigLocator,
    profile: Option<String>,
    overlay: EnvOverlay,
}

impl ConfigResolver {
    /// Create a resolver reading from `env`.
    ///
    /// The current directory and home directory are captured here, once.
    pub fn new(env: Env) -> Self {
        let locator = ConfigLocator::from_env(&env);
        Self {
            env,
            locator,
            profile: None,
            overlay: EnvOverlay::new(),
        }
    }

    /// Create a resolver from a snapshot of the process environment.
    pub fn from_process() -> Self {
        Self::new(Env::from_process())
    }

    /// Start the file search from `root` instead of the current directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.locator = self.locator.with_root(root);
        self
    }

    /// Set (or clear) the home directory used for the global config fallback.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.locator = self.locator.with_home(home);
        self
    }

    /// Override the config file name or path, taking precedence over `FOUNDRY_CONFIG`.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.locator = self.locator.with_override(Some(path.into()));
        self
    }

    /// Select the active profile, taking precedence over `FOUNDRY_PROFILE`.
    pub fn with_profile(mut self, name: impl Into<String>) -> Self {
        self.profile = Some(name.into());
        self
    }

    /// Change the environment prefixes; earlier prefixes win on collision.
    pub fn with_env_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overlay = EnvOverlay::with_prefixes(prefixes);
        self
    }

    /// The environment snapshot this resolver reads from.
    pub fn env(&self) -> &Env {
        &self.env
    }

    /// The profile that `resolve` will use.
    pub fn active_profile(&self) -> String {
        self.profile
            .clone()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.env.get_non_empty(PROFILE_ENV))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    }

    /// The config file that `resolve` will read, if any.
    pub fn config_file(&self) -> Option<PathBuf> {
        self.locator.locate()
    }

    /// Run the resolution pipeline.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        let profile = self.active_profile();
        let config_file = self.locator.locate();
        debug!(profile = %profile, config_file = ?config_file, "resolving configuration");

        let document = config_file
            .as_deref()
            .map(ConfigDocument::load)
            .transpose()?;

        let mut table = Config::defaults_table()?;

        if let Some(doc) = &document {
            merge_profile(&mut table, global_alias_tables(doc));

            if let Some(default) = doc.default_profile() {
                merge_profile(&mut table, default.clone());
            }

            if profile != DEFAULT_PROFILE {
                match doc.profile(&profile) {
                    Some(active) => merge_profile(&mut table, active.clone()),
                    None => debug!(profile = %profile, "profile not in config file, using defaults"),
                }
            }
        }

        let overlay = self.overlay.collect(&self.env);
        debug!(keys = overlay.len(), "applying environment overlay");
        merge_profile(&mut table, overlay);

        interpolate_table(&mut table, LAZY_INTERPOLATION_KEYS, &self.env)?;

        let base_dir = self.base_dir(config_file.as_deref());
        set_root(&mut table, &base_dir);

        let config = Config::deserialize(Value::Table(table.clone())).map_err(|e| {
            ConfigError::InvalidValue {
                profile: profile.clone(),
                message: e.to_string().trim().to_string(),
            }
        })?;

        Ok(ResolvedConfig::new(profile, config_file, table, config))
    }

    /// Directory relative paths (and the default root) are anchored to.
    ///
    /// The global config file lives in the home directory, so it does not
    /// move the project root away from the starting directory.
    fn base_dir(&self, config_file: Option<&Path>) -> PathBuf {
        let global = self.locator.global_config_file();
        match config_file {
            Some(file) if global.as_deref() != Some(file) => file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.locator.root().to_path_buf()),
            _ => self.locator.root().to_path_buf(),
        }
    }
}

fn global_alias_tables(doc: &ConfigDocument) -> Table {
    let mut table = Table::new();
    if !doc.rpc_endpoints().is_empty() {
        table.insert(
            RPC_ENDPOINTS_KEY.to_string(),
            Value::Table(doc.rpc_endpoints().clone()),
        );
    }
    if !doc.etherscan().is_empty() {
        table.insert(ETHERSCAN_KEY.to_string(), Value::Table(doc.etherscan().clone()));
    }
    table
}

/// Anchor a configured `root` to `base_dir`, or default it to `base_dir`.
fn set_root(table: &mut Table, base_dir: &Path) {
    let root = match table.get(ROOT_KEY) {
        Some(Value::String(configured)) => base_dir.join(configured),
        Some(_) => return,
        None => base_dir.to_path_buf(),
    };
    table.insert(
        ROOT_KEY.to_string(),
        Value::String(root.to_string_lossy().into_owned()),
    );
}
