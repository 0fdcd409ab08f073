//! The typed configuration record and its built-in defaults.
//!
//! Responsibilities:
//! - Define `Config`, the strongly-typed view of a resolved profile.
//! - Provide the complete set of built-in defaults via `Default`.
//! - Keep unrecognised keys in a generic side-table (`extra`).
//!
//! Does NOT handle:
//! - Merging sources (see `resolver` and `merge`).
//! - Resolving `${VAR}` placeholders in endpoint or Etherscan values (see `endpoints`).
//!
//! Invariants:
//! - Every recognised key has a default; optional keys default to unset and are
//!   omitted when serialised.
//! - `root` is never part of the defaults table; the resolver fills it in.
//! - Text and path fields also accept numbers, kept in their text form, since
//!   loosely coerced environment values may arrive as integers or floats.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use super::cache::StorageCachingConfig;
use super::chain::Chain;
use super::compiler::{ModelCheckerSettings, OptimizerDetails};
use super::endpoints::{EtherscanConfigs, RpcEndpoints};
use crate::constants::{DEFAULT_PROFILE, DEFAULT_SENDER};
use crate::error::ConfigError;

/// A fully resolved, strongly-typed profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project root; relative paths below are relative to it.
    #[serde(skip_serializing)]
    pub root: PathBuf,
    /// Contract sources.
    #[serde(deserialize_with = "text")]
    pub src: PathBuf,
    /// Test sources.
    #[serde(deserialize_with = "text")]
    pub test: PathBuf,
    /// Build artifacts.
    #[serde(deserialize_with = "text")]
    pub out: PathBuf,
    /// Library search paths.
    pub libs: Vec<PathBuf>,
    /// Import remappings, `prefix=target`.
    pub remappings: Vec<String>,
    pub cache: bool,
    #[serde(deserialize_with = "text")]
    pub cache_path: PathBuf,
    /// Where broadcast transaction logs are written.
    #[serde(deserialize_with = "text")]
    pub broadcast: PathBuf,
    pub allow_paths: Vec<PathBuf>,
    pub force: bool,
    #[serde(deserialize_with = "text")]
    pub evm_version: String,
    pub gas_reports: Vec<String>,
    pub gas_reports_ignore: Vec<String>,
    /// Pinned compiler version or path; auto-detected when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "optional_text")]
    pub solc: Option<String>,
    pub auto_detect_solc: bool,
    pub offline: bool,
    pub optimizer: bool,
    pub optimizer_runs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimizer_details: Option<OptimizerDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_checker: Option<ModelCheckerSettings>,
    pub verbosity: u8,
    /// URL or `rpc_endpoints` alias; placeholders resolve on access.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "optional_text")]
    pub eth_rpc_url: Option<String>,
    /// Fallback Etherscan key; placeholders resolve on access.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "optional_text")]
    pub etherscan_api_key: Option<String>,
    pub ignored_error_codes: Vec<u64>,
    pub deny_warnings: bool,
    pub fuzz_runs: u32,
    pub fuzz_max_local_rejects: u32,
    pub fuzz_max_global_rejects: u32,
    pub ffi: bool,
    #[serde(deserialize_with = "text")]
    pub sender: String,
    #[serde(deserialize_with = "text")]
    pub tx_origin: String,
    #[serde(deserialize_with = "text")]
    pub initial_balance: String,
    pub block_number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fork_block_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<Chain>,
    pub gas_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
    pub block_base_fee_per_gas: u64,
    #[serde(deserialize_with = "text")]
    pub block_coinbase: String,
    pub block_timestamp: u64,
    pub block_difficulty: u64,
    pub memory_limit: u64,
    pub extra_output: Vec<String>,
    pub extra_output_files: Vec<String>,
    pub names: bool,
    pub sizes: bool,
    pub via_ir: bool,
    pub rpc_storage_caching: StorageCachingConfig,
    pub no_storage_caching: bool,
    #[serde(deserialize_with = "text")]
    pub bytecode_hash: String,
    pub build_info: bool,
    pub rpc_endpoints: RpcEndpoints,
    pub etherscan: EtherscanConfigs,
    /// Keys this crate does not recognise, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            src: "src".into(),
            test: "test".into(),
            out: "out".into(),
            libs: vec!["lib".into()],
            remappings: vec![],
            cache: true,
            cache_path: "cache".into(),
            broadcast: "broadcast".into(),
            allow_paths: vec![],
            force: false,
            evm_version: "london".to_string(),
            gas_reports: vec!["*".to_string()],
            gas_reports_ignore: vec![],
            solc: None,
            auto_detect_solc: true,
            offline: false,
            optimizer: true,
            optimizer_runs: 200,
            optimizer_details: None,
            model_checker: None,
            verbosity: 0,
            eth_rpc_url: None,
            etherscan_api_key: None,
            ignored_error_codes: vec![1878, 5574],
            deny_warnings: false,
            fuzz_runs: 256,
            fuzz_max_local_rejects: 1024,
            fuzz_max_global_rejects: 65536,
            ffi: false,
            sender: DEFAULT_SENDER.to_string(),
            tx_origin: DEFAULT_SENDER.to_string(),
            initial_balance: "0xffffffffffffffffffffffff".to_string(),
            block_number: 1,
            fork_block_number: None,
            chain_id: None,
            gas_limit: i64::MAX as u64,
            gas_price: None,
            block_base_fee_per_gas: 0,
            block_coinbase: "0x0000000000000000000000000000000000000000".to_string(),
            block_timestamp: 1,
            block_difficulty: 0,
            memory_limit: 1 << 25,
            extra_output: vec![],
            extra_output_files: vec![],
            names: false,
            sizes: false,
            via_ir: false,
            rpc_storage_caching: StorageCachingConfig::default(),
            no_storage_caching: false,
            bytecode_hash: "ipfs".to_string(),
            build_info: false,
            rpc_endpoints: RpcEndpoints::default(),
            etherscan: EtherscanConfigs::default(),
            extra: BTreeMap::new(),
        }
    }
}

impl Config {
    /// The built-in defaults as a TOML table, the first merge stage.
    pub fn defaults_table() -> Result<toml::Table, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            profile: DEFAULT_PROFILE.to_string(),
            message,
        };
        match toml::Value::try_from(Config::default()) {
            Ok(toml::Value::Table(table)) => Ok(table),
            Ok(other) => Err(invalid(format!(
                "defaults serialized to a {} instead of a table",
                other.type_str()
            ))),
            Err(e) => Err(invalid(e.to_string())),
        }
    }

    /// Whether fork state from `endpoint` on `chain` may be cached.
    pub fn enable_caching(&self, endpoint: &str, chain: impl Into<Chain>) -> bool {
        !self.no_storage_caching && self.rpc_storage_caching.enable_for(endpoint, &chain.into())
    }

    /// Whether `key` is one of the recognised configuration keys.
    pub fn is_known_key(key: &str) -> bool {
        KNOWN_KEYS.contains(&key)
    }
}

/// A scalar read where text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
        }
    }
}

/// Deserialize a string, integer or float as text.
fn text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Scalar::deserialize(deserializer).map(|s| T::from(s.into_text()))
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// Every key `Config` maps to a typed field.
pub const KNOWN_KEYS: &[&str] = &[
    "root",
    "src",
    "test",
    "out",
    "libs",
    "remappings",
    "cache",
    "cache_path",
    "broadcast",
    "allow_paths",
    "force",
    "evm_version",
    "gas_reports",
    "gas_reports_ignore",
    "solc",
    "auto_detect_solc",
    "offline",
    "optimizer",
    "optimizer_runs",
    "optimizer_details",
    "model_checker",
    "verbosity",
    "eth_rpc_url",
    "etherscan_api_key",
    "ignored_error_codes",
    "deny_warnings",
    "fuzz_runs",
    "fuzz_max_local_rejects",
    "fuzz_max_global_rejects",
    "ffi",
    "sender",
    "tx_origin",
    "initial_balance",
    "block_number",
    "fork_block_number",
    "chain_id",
    "gas_limit",
    "gas_price",
    "block_base_fee_per_gas",
    "block_coinbase",
    "block_timestamp",
    "block_difficulty",
    "memory_limit",
    "extra_output",
    "extra_output_files",
    "names",
    "sizes",
    "via_ir",
    "rpc_storage_caching",
    "no_storage_caching",
    "bytecode_hash",
    "build_info",
    "rpc_endpoints",
    "etherscan",
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_defaults_table_covers_every_non_optional_key() {
        let table = Config::defaults_table().unwrap();
        for key in ["src", "out", "libs", "optimizer", "optimizer_runs", "rpc_storage_caching"] {
            assert!(table.contains_key(key), "missing default for {key}");
        }
        assert!(!table.contains_key("root"));
        assert!(!table.contains_key("solc"));
        assert_eq!(table["gas_limit"].as_integer(), Some(i64::MAX));
        assert_eq!(table["memory_limit"].as_integer(), Some(33_554_432));
        for key in table.keys() {
            assert!(Config::is_known_key(key), "{key} is not listed as known");
        }
    }

    #[test]
    fn test_defaults_table_round_trips_to_defaults() {
        let config = Config::deserialize(toml::Value::Table(Config::defaults_table().unwrap())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_keys_land_in_extra() {
        let config: Config =
            toml::from_str("src = \"contracts\"\nplugin_level = 3\n[plugin]\nmode = \"fast\"")
                .unwrap();
        assert_eq!(config.src, PathBuf::from("contracts"));
        assert_eq!(config.extra["plugin_level"].as_integer(), Some(3));
        assert_eq!(config.extra["plugin"]["mode"].as_str(), Some("fast"));
        assert!(!config.extra.contains_key("src"));
    }

    #[test]
    fn test_enable_caching_respects_global_switch() {
        let mut config = Config::default();
        assert!(config.enable_caching("https://eth.example", 1u64));
        config.no_storage_caching = true;
        assert!(!config.enable_caching("https://eth.example", 1u64));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(toml::from_str::<Config>("optimizer_runs = \"many\"").is_err());
        assert!(toml::from_str::<Config>("sender = [1, 2]").is_err());
    }

    #[test]
    fn test_numbers_are_accepted_as_text() {
        let config: Config = toml::from_str(
            "initial_balance = 1000000\netherscan_api_key = 123456789\nsolc = 0.8\nout = 42",
        )
        .unwrap();
        assert_eq!(config.initial_balance, "1000000");
        assert_eq!(config.etherscan_api_key.as_deref(), Some("123456789"));
        assert_eq!(config.solc.as_deref(), Some("0.8"));
        assert_eq!(config.out, PathBuf::from("42"));
        assert_eq!(config.sender, DEFAULT_SENDER);
        assert_eq!(config.eth_rpc_url, None);
    }
}
