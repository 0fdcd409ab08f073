//! Per-alias RPC endpoints and Etherscan credentials.
//!
//! Responsibilities:
//! - Hold the merged `[rpc_endpoints]` and `[etherscan]` alias maps.
//! - Resolve `${VAR}` placeholders when a single alias is requested.
//!
//! Does NOT handle:
//! - Any network access with the resolved URLs or keys.
//!
//! Invariants:
//! - Placeholders are only resolved for the alias being requested, so an unset
//!   variable for an unused alias never fails.
//! - An Etherscan entry without `chain` belongs to the chain named by its alias.
//! - Resolved Etherscan keys are held as `SecretString`.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::chain::Chain;
use crate::constants::{ETHERSCAN_KEY, RPC_ENDPOINTS_KEY};
use crate::env::Env;
use crate::error::ConfigError;
use crate::interpolate::{has_placeholder, interpolate};

/// A single RPC endpoint as written in the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RpcEndpoint {
    /// A literal URL.
    Url(String),
    /// A value containing `${VAR}` placeholders.
    Env(String),
}

impl RpcEndpoint {
    /// The value exactly as configured.
    pub fn as_raw(&self) -> &str {
        match self {
            RpcEndpoint::Url(s) | RpcEndpoint::Env(s) => s,
        }
    }

    /// Substitute placeholders; `alias` is used to name the key in errors.
    pub fn resolve(&self, alias: &str, env: &Env) -> Result<String, ConfigError> {
        match self {
            RpcEndpoint::Url(url) => Ok(url.clone()),
            RpcEndpoint::Env(raw) => {
                let key = format!("{RPC_ENDPOINTS_KEY}.{alias}");
                Ok(interpolate(raw, &key, env)?.into_owned())
            }
        }
    }
}

impl From<String> for RpcEndpoint {
    fn from(s: String) -> Self {
        if has_placeholder(&s) {
            RpcEndpoint::Env(s)
        } else {
            RpcEndpoint::Url(s)
        }
    }
}

impl From<RpcEndpoint> for String {
    fn from(endpoint: RpcEndpoint) -> Self {
        match endpoint {
            RpcEndpoint::Url(s) | RpcEndpoint::Env(s) => s,
        }
    }
}

impl fmt::Display for RpcEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_raw())
    }
}

/// Alias → endpoint map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RpcEndpoints(BTreeMap<String, RpcEndpoint>);

impl RpcEndpoints {
    pub fn get(&self, alias: &str) -> Option<&RpcEndpoint> {
        self.0.get(alias)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.0.contains_key(alias)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RpcEndpoint)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve one alias; `Ok(None)` if the alias is not configured.
    pub fn resolve(&self, alias: &str, env: &Env) -> Result<Option<String>, ConfigError> {
        self.get(alias)
            .map(|endpoint| endpoint.resolve(alias, env))
            .transpose()
    }
}

impl FromIterator<(String, RpcEndpoint)> for RpcEndpoints {
    fn from_iter<I: IntoIterator<Item = (String, RpcEndpoint)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One `[etherscan]` entry as written in the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtherscanConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<Chain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub key: String,
}

impl EtherscanConfig {
    /// The chain this entry applies to, defaulting to the alias.
    pub fn chain_or_alias(&self, alias: &str) -> Chain {
        self.chain.clone().unwrap_or_else(|| Chain::from_alias(alias))
    }

    /// Interpolate `key` and `url` for use by a client.
    pub fn resolve(&self, alias: &str, env: &Env) -> Result<ResolvedEtherscanConfig, ConfigError> {
        let key = interpolate(&self.key, &format!("{ETHERSCAN_KEY}.{alias}.key"), env)?;
        let url = self
            .url
            .as_deref()
            .map(|url| interpolate(url, &format!("{ETHERSCAN_KEY}.{alias}.url"), env))
            .transpose()?
            .map(|url| url.into_owned());

        Ok(ResolvedEtherscanConfig {
            alias: alias.to_string(),
            chain: self.chain_or_alias(alias),
            url,
            key: SecretString::new(key.into_owned().into()),
        })
    }
}

/// An Etherscan entry with placeholders resolved.
#[derive(Debug, Clone)]
pub struct ResolvedEtherscanConfig {
    pub alias: String,
    pub chain: Chain,
    pub url: Option<String>,
    pub key: SecretString,
}

/// Alias → Etherscan entry map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EtherscanConfigs(BTreeMap<String, EtherscanConfig>);

impl EtherscanConfigs {
    pub fn get(&self, alias: &str) -> Option<&EtherscanConfig> {
        self.0.get(alias)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EtherscanConfig)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve one alias; `Ok(None)` if the alias is not configured.
    pub fn resolve(
        &self,
        alias: &str,
        env: &Env,
    ) -> Result<Option<ResolvedEtherscanConfig>, ConfigError> {
        self.get(alias)
            .map(|config| config.resolve(alias, env))
            .transpose()
    }

    /// Resolve the first entry whose chain matches `chain`.
    pub fn resolve_for_chain(
        &self,
        chain: &Chain,
        env: &Env,
    ) -> Result<Option<ResolvedEtherscanConfig>, ConfigError> {
        self.iter()
            .find(|(alias, config)| config.chain_or_alias(alias).matches(chain))
            .map(|(alias, config)| config.resolve(alias, env))
            .transpose()
    }
}

impl FromIterator<(String, EtherscanConfig)> for EtherscanConfigs {
    fn from_iter<I: IntoIterator<Item = (String, EtherscanConfig)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn env(vars: &[(&str, &str)]) -> Env {
        vars.iter().copied().collect()
    }

    #[test]
    fn test_endpoint_kind_follows_placeholders() {
        assert!(matches!(
            RpcEndpoint::from("https://x".to_string()),
            RpcEndpoint::Url(_)
        ));
        assert!(matches!(
            RpcEndpoint::from("${RPC}".to_string()),
            RpcEndpoint::Env(_)
        ));
    }

    #[test]
    fn test_resolve_only_requested_alias() {
        let endpoints: RpcEndpoints = toml::from_str(
            "goerli = \"https://eth-goerli.example/v2/${GOERLI_API_KEY}\"\nmainnet = \"${UNSET_MAINNET}\"",
        )
        .unwrap();
        let env = env(&[("GOERLI_API_KEY", "xyz")]);

        assert_eq!(
            endpoints.resolve("goerli", &env).unwrap().as_deref(),
            Some("https://eth-goerli.example/v2/xyz")
        );
        let err = endpoints.resolve("mainnet", &env).unwrap_err();
        assert!(
            matches!(&err, ConfigError::MissingInterpolationVariable { var, key } if var == "UNSET_MAINNET" && key == "rpc_endpoints.mainnet")
        );
        assert_eq!(endpoints.resolve("unknown", &env).unwrap(), None);
    }

    #[test]
    fn test_etherscan_chain_defaults_to_alias() {
        let configs: EtherscanConfigs = toml::from_str(
            "optimism = { key = \"${OP_KEY}\" }\nmainnet = { key = \"abc\", chain = 1, url = \"https://api.example/api\" }",
        )
        .unwrap();
        let env = env(&[("OP_KEY", "op-secret")]);

        let op = configs.resolve("optimism", &env).unwrap().unwrap();
        assert_eq!(op.chain, Chain::Named("optimism".to_string()));
        assert_eq!(op.key.expose_secret(), "op-secret");
        assert_eq!(op.url, None);

        let mainnet = configs.resolve_for_chain(&Chain::Id(1), &env).unwrap().unwrap();
        assert_eq!(mainnet.alias, "mainnet");
        assert_eq!(mainnet.url.as_deref(), Some("https://api.example/api"));
    }

    #[test]
    fn test_etherscan_key_is_mandatory() {
        let err = toml::from_str::<EtherscanConfigs>("mainnet = { chain = 1 }").unwrap_err();
        assert!(err.to_string().contains("key"));
    }

    #[test]
    fn test_etherscan_missing_key_variable() {
        let configs: EtherscanConfigs = toml::from_str("mainnet = { key = \"${NOPE}\" }").unwrap();
        let err = configs.resolve("mainnet", &Env::empty()).unwrap_err();
        assert!(
            matches!(&err, ConfigError::MissingInterpolationVariable { key, .. } if key == "etherscan.mainnet.key")
        );
    }
}
