//! RPC storage caching rules.
//!
//! Responsibilities:
//! - Describe which chains and which endpoints may have fork state cached.
//! - Parse `endpoints` as `"all"`, `"remote"`, or a regular expression.
//!
//! Invariants:
//! - `"remote"` means any endpoint whose host is not a loopback address.
//! - An endpoint that cannot be parsed as a URL (e.g. an IPC path) is local.
//! - An invalid regular expression fails deserialisation.

use std::fmt;
use std::net::IpAddr;

use regex::Regex;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::chain::Chain;

/// `[profile.<name>.rpc_storage_caching]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageCachingConfig {
    pub chains: CachedChains,
    pub endpoints: CachedEndpoints,
}

impl StorageCachingConfig {
    /// Whether state fetched from `endpoint` on `chain` may be cached.
    pub fn enable_for(&self, endpoint: &str, chain: &Chain) -> bool {
        self.chains.is_match(chain) && self.endpoints.is_match(endpoint)
    }
}

/// Chains eligible for caching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CachedChains {
    #[default]
    All,
    None,
    Chains(Vec<Chain>),
}

impl CachedChains {
    pub fn is_match(&self, chain: &Chain) -> bool {
        match self {
            CachedChains::All => true,
            CachedChains::None => false,
            CachedChains::Chains(chains) => chains.iter().any(|c| c.matches(chain)),
        }
    }
}

impl Serialize for CachedChains {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CachedChains::All => serializer.serialize_str("all"),
            CachedChains::None => serializer.serialize_str("none"),
            CachedChains::Chains(chains) => chains.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CachedChains {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Keyword(String),
            Chains(Vec<Chain>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Keyword(s) => match s.as_str() {
                "all" => Ok(CachedChains::All),
                "none" => Ok(CachedChains::None),
                other => Err(de::Error::custom(format!(
                    "invalid cached chains `{other}`, expected \"all\", \"none\" or a list of chains"
                ))),
            },
            Raw::Chains(chains) => Ok(CachedChains::Chains(chains)),
        }
    }
}

/// Endpoints eligible for caching.
#[derive(Debug, Clone, Default)]
pub enum CachedEndpoints {
    All,
    #[default]
    Remote,
    Pattern(Regex),
}

impl CachedEndpoints {
    pub fn is_match(&self, endpoint: &str) -> bool {
        match self {
            CachedEndpoints::All => true,
            CachedEndpoints::Remote => is_remote_endpoint(endpoint),
            CachedEndpoints::Pattern(re) => re.is_match(endpoint),
        }
    }
}

impl PartialEq for CachedEndpoints {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CachedEndpoints::All, CachedEndpoints::All) => true,
            (CachedEndpoints::Remote, CachedEndpoints::Remote) => true,
            (CachedEndpoints::Pattern(a), CachedEndpoints::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for CachedEndpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CachedEndpoints::All => f.write_str("all"),
            CachedEndpoints::Remote => f.write_str("remote"),
            CachedEndpoints::Pattern(re) => f.write_str(re.as_str()),
        }
    }
}

impl Serialize for CachedEndpoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CachedEndpoints {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "all" => Ok(CachedEndpoints::All),
            "remote" => Ok(CachedEndpoints::Remote),
            pattern => Regex::new(pattern).map(CachedEndpoints::Pattern).map_err(|e| {
                de::Error::custom(format!("invalid endpoint pattern `{pattern}`: {e}"))
            }),
        }
    }
}

/// Whether `endpoint` points somewhere other than this machine.
pub fn is_remote_endpoint(endpoint: &str) -> bool {
    let Ok(url) = url::Url::parse(endpoint) else {
        return false;
    };
    match url.host() {
        Some(url::Host::Domain(domain)) => !domain.eq_ignore_ascii_case("localhost"),
        Some(url::Host::Ipv4(ip)) => !is_local_ip(IpAddr::V4(ip)),
        Some(url::Host::Ipv6(ip)) => !is_local_ip(IpAddr::V6(ip)),
        None => false,
    }
}

fn is_local_ip(ip: IpAddr) -> bool {
    ip.is_loopback() || ip.is_unspecified()
}
