//! Layered configuration for Foundry-style projects.
//!
//! This crate locates `foundry.toml`, selects a profile, and merges built-in
//! defaults, file profiles and `FOUNDRY_`/`DAPP_` environment variables into
//! one typed [`Config`].
//!
//! ```no_run
//! use foundry_config::{ConfigResolver, Env};
//!
//! # fn main() -> Result<(), foundry_config::ConfigError> {
//! let env = Env::from_process();
//! let resolved = ConfigResolver::new(env.clone()).resolve()?;
//! println!("profile {} writes to {}", resolved.profile(), resolved.out_dir().display());
//! if let Some(url) = resolved.eth_rpc_url(&env)? {
//!     println!("rpc: {url}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod coerce;
pub mod constants;
pub mod document;
pub mod dotenv;
pub mod env;
pub mod error;
pub mod interpolate;
pub mod locate;
pub mod merge;
mod resolver;
pub mod types;

pub use coerce::coerce_value;
pub use document::ConfigDocument;
pub use dotenv::{dotenv_disabled, load_dotenv};
pub use env::{Env, EnvOverlay, env_var_or_none};
pub use error::ConfigError;
pub use locate::ConfigLocator;
pub use resolver::{ConfigResolver, ResolvedConfig};
pub use types::{
    CachedChains, CachedEndpoints, Chain, Config, EtherscanConfig, EtherscanConfigs,
    ResolvedEtherscanConfig, RpcEndpoint, RpcEndpoints, StorageCachingConfig,
};
