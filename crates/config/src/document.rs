//! The parsed `foundry.toml` document.
//!
//! Responsibilities:
//! - Parse the file into profile name → profile table.
//! - Split out the global `rpc_endpoints` and `etherscan` tables.
//! - Accept both `[profile.<name>]` sections and legacy top-level `[<name>]` sections.
//!
//! Does NOT handle:
//! - Merging profiles with each other or with defaults (see the `resolver` module).
//! - Interpreting keys; unknown keys are preserved as-is.
//!
//! Invariants:
//! - The file is read fully and closed before parsing; no handle outlives `load`.
//! - When both layouts define the same profile, `[profile.<name>]` wins per key.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::warn;

use crate::constants::{DEFAULT_PROFILE, ETHERSCAN_KEY, PROFILE_SECTION, RPC_ENDPOINTS_KEY};
use crate::error::ConfigError;
use crate::merge::merge_into;

/// A parsed configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    path: Option<PathBuf>,
    profiles: BTreeMap<String, Table>,
    rpc_endpoints: Table,
    etherscan: Table,
}

impl ConfigDocument {
    /// Read and parse the document at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileNotReadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_with_path(&content, path)
    }

    /// Parse a document from a string, attributing errors to `path`.
    pub fn parse_with_path(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let table: Table = toml::from_str(content)
            .map_err(|err| ConfigError::from_toml(path.to_path_buf(), &err, content))?;
        let mut doc = Self::from_table(table);
        doc.path = Some(path.to_path_buf());
        Ok(doc)
    }

    /// Split a raw top-level table into profiles and global tables.
    pub fn from_table(table: Table) -> Self {
        let mut legacy = BTreeMap::new();
        let mut nested = BTreeMap::new();
        let mut rpc_endpoints = Table::new();
        let mut etherscan = Table::new();

        for (key, value) in table {
            let inner = match value {
                Value::Table(inner) => inner,
                other => {
                    warn!(
                        key = %key,
                        kind = other.type_str(),
                        "ignoring top-level value outside of a profile"
                    );
                    continue;
                }
            };
            match key.as_str() {
                PROFILE_SECTION => {
                    for (name, profile) in inner {
                        match profile {
                            Value::Table(profile) => {
                                nested.insert(name, profile);
                            }
                            other => warn!(
                                profile = %name,
                                kind = other.type_str(),
                                "ignoring non-table profile entry"
                            ),
                        }
                    }
                }
                RPC_ENDPOINTS_KEY => rpc_endpoints = inner,
                ETHERSCAN_KEY => etherscan = inner,
                _ => {
                    legacy.insert(key, inner);
                }
            }
        }

        let mut profiles = legacy;
        for (name, profile) in nested {
            match profiles.get_mut(&name) {
                Some(existing) => merge_into(existing, profile),
                None => {
                    profiles.insert(name, profile);
                }
            }
        }

        Self {
            path: None,
            profiles,
            rpc_endpoints,
            etherscan,
        }
    }

    /// The file this document was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The table for `name`, if the document defines it.
    pub fn profile(&self, name: &str) -> Option<&Table> {
        self.profiles.get(name)
    }

    /// The `default` profile table, if present in the file.
    pub fn default_profile(&self) -> Option<&Table> {
        self.profile(DEFAULT_PROFILE)
    }

    /// Names of all profiles defined in the document.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// The global `[rpc_endpoints]` table.
    pub fn rpc_endpoints(&self) -> &Table {
        &self.rpc_endpoints
    }

    /// The global `[etherscan]` table.
    pub fn etherscan(&self) -> &Table {
        &self.etherscan
    }
}
