//! Chain identifiers.
//!
//! A chain is referenced either by numeric id (`1`) or by name (`"mainnet"`).
//! Names are never checked against a registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A chain referenced by id or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Chain {
    Id(u64),
    Named(String),
}

impl Chain {
    /// Interpret an alias as a chain: numeric aliases become ids.
    pub fn from_alias(alias: &str) -> Self {
        alias
            .parse::<u64>()
            .map(Chain::Id)
            .unwrap_or_else(|_| Chain::Named(alias.to_string()))
    }

    /// The numeric id, if this chain was given as one.
    pub fn id(&self) -> Option<u64> {
        match self {
            Chain::Id(id) => Some(*id),
            Chain::Named(_) => None,
        }
    }

    /// Whether two references denote the same chain; names compare case-insensitively.
    pub fn matches(&self, other: &Chain) -> bool {
        match (self, other) {
            (Chain::Id(a), Chain::Id(b)) => a == b,
            (Chain::Named(a), Chain::Named(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chain::Id(id) => write!(f, "{id}"),
            Chain::Named(name) => f.write_str(name),
        }
    }
}

impl From<u64> for Chain {
    fn from(id: u64) -> Self {
        Chain::Id(id)
    }
}

impl From<&str> for Chain {
    fn from(name: &str) -> Self {
        Chain::from_alias(name)
    }
}
