//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the strongly-typed `Config` record and its built-in defaults.
//! - Define grouped settings (optimizer details, model checker, storage caching).
//! - Define the per-alias RPC endpoint and Etherscan maps.
//!
//! Does NOT handle:
//! - Locating, parsing or merging configuration sources (see `resolver` module).
//! - Any network use of endpoints or keys.
//!
//! Invariants:
//! - Optional settings are omitted when serialised so the defaults table only
//!   contains keys with a concrete default.
//! - Resolved secrets use `secrecy::SecretString` to prevent accidental logging.

mod cache;
mod chain;
mod compiler;
mod config;
mod endpoints;

pub use cache::{CachedChains, CachedEndpoints, StorageCachingConfig, is_remote_endpoint};
pub use chain::Chain;
pub use compiler::{ModelCheckerEngine, ModelCheckerSettings, OptimizerDetails, YulDetails};
pub use config::{Config, KNOWN_KEYS};
pub use endpoints::{
    EtherscanConfig, EtherscanConfigs, ResolvedEtherscanConfig, RpcEndpoint, RpcEndpoints,
};
