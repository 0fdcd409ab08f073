//! The immutable result of a configuration resolution.
//!
//! Responsibilities:
//! - Expose the merged table, the typed `Config` and the active profile.
//! - Resolve RPC endpoints and Etherscan credentials on request.
//! - Render the resolved profile back to TOML.
//!
//! Does NOT handle:
//! - Re-resolution; a `ResolvedConfig` never changes after `resolve()`.
//!
//! Invariants:
//! - `table` and `config` describe the same merged state.
//! - Lazy keys still hold their raw `${VAR}` text until an accessor resolves them.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use toml::{Table, Value};

use crate::constants::PROFILE_SECTION;
use crate::env::Env;
use crate::error::ConfigError;
use crate::interpolate::interpolate;
use crate::types::{
    Chain, Config, EtherscanConfigs, ResolvedEtherscanConfig, RpcEndpoints,
};

/// A resolved profile, ready to hand to consumers.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    profile: String,
    config_file: Option<PathBuf>,
    table: Table,
    config: Config,
}

impl ResolvedConfig {
    pub(crate) fn new(
        profile: String,
        config_file: Option<PathBuf>,
        table: Table,
        config: Config,
    ) -> Self {
        Self {
            profile,
            config_file,
            table,
            config,
        }
    }

    /// The active profile name.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// The config file that was read, if any.
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// The merged key/value table, including `root`.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Look up a value by dotted path, e.g. `optimizer_details.yul`.
    pub fn get(&self, dotted_key: &str) -> Option<&Value> {
        let mut parts = dotted_key.split('.');
        let first = parts.next()?;
        parts.try_fold(self.table.get(first)?, |value, part| {
            value.as_table()?.get(part)
        })
    }

    /// An unrecognised key kept in the side-table.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.config.extra.get(key)
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn src_dir(&self) -> PathBuf {
        self.config.root.join(&self.config.src)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.config.root.join(&self.config.out)
    }

    pub fn test_dir(&self) -> PathBuf {
        self.config.root.join(&self.config.test)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.config.root.join(&self.config.cache_path)
    }

    pub fn lib_dirs(&self) -> Vec<PathBuf> {
        self.config
            .libs
            .iter()
            .map(|lib| self.config.root.join(lib))
            .collect()
    }

    pub fn rpc_endpoints(&self) -> &RpcEndpoints {
        &self.config.rpc_endpoints
    }

    pub fn etherscan_configs(&self) -> &EtherscanConfigs {
        &self.config.etherscan
    }

    /// Resolve one RPC alias; `Ok(None)` if it is not configured.
    pub fn rpc_url(&self, alias: &str, env: &Env) -> Result<Option<String>, ConfigError> {
        self.config.rpc_endpoints.resolve(alias, env)
    }

    /// Resolve `eth_rpc_url`, following it through `rpc_endpoints` when it
    /// names an alias.
    pub fn eth_rpc_url(&self, env: &Env) -> Result<Option<String>, ConfigError> {
        let Some(raw) = self.config.eth_rpc_url.as_deref() else {
            return Ok(None);
        };
        if self.config.rpc_endpoints.contains(raw) {
            return self.rpc_url(raw, env);
        }
        Ok(Some(interpolate(raw, "eth_rpc_url", env)?.into_owned()))
    }

    /// Resolve one Etherscan alias; `Ok(None)` if it is not configured.
    pub fn etherscan(
        &self,
        alias: &str,
        env: &Env,
    ) -> Result<Option<ResolvedEtherscanConfig>, ConfigError> {
        self.config.etherscan.resolve(alias, env)
    }

    /// The Etherscan key for `chain`, falling back to `etherscan_api_key`.
    ///
    /// A top-level key naming an `[etherscan]` alias resolves to that alias's key.
    pub fn etherscan_api_key(
        &self,
        chain: Option<&Chain>,
        env: &Env,
    ) -> Result<Option<SecretString>, ConfigError> {
        if let Some(chain) = chain {
            if let Some(resolved) = self.config.etherscan.resolve_for_chain(chain, env)? {
                return Ok(Some(resolved.key));
            }
        }

        let Some(raw) = self.config.etherscan_api_key.as_deref() else {
            return Ok(None);
        };
        if let Some(resolved) = self.config.etherscan.resolve(raw, env)? {
            return Ok(Some(resolved.key));
        }
        let key = interpolate(raw, "etherscan_api_key", env)?;
        Ok(Some(SecretString::new(key.into_owned().into())))
    }

    /// Whether fork state from `endpoint` on `chain` may be cached.
    pub fn enable_caching(&self, endpoint: &str, chain: impl Into<Chain>) -> bool {
        self.config.enable_caching(endpoint, chain)
    }

    /// Render the resolved profile as a `[profile.<name>]` document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let mut profiles = Table::new();
        profiles.insert(self.profile.clone(), Value::try_from(&self.config)?);
        let mut document = Table::new();
        document.insert(PROFILE_SECTION.to_string(), Value::Table(profiles));
        Ok(toml::to_string_pretty(&document)?)
    }
}
