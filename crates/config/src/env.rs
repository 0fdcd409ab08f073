//! Environment snapshot and prefixed-variable overlay.
//!
//! Responsibilities:
//! - Capture the process environment once into an immutable `Env` snapshot.
//! - Provide helper functions for reading variables with empty/whitespace filtering.
//! - Turn `FOUNDRY_*` / `DAPP_*` variables into a flat overlay table.
//!
//! Does NOT handle:
//! - Merging the overlay into the resolved table (see `merge.rs`).
//! - `${VAR}` substitution (see `interpolate.rs`).
//! - .env file loading (see `dotenv.rs`).
//!
//! Invariants:
//! - The process environment is only ever read, never mutated.
//! - Empty or whitespace-only variables are treated as unset.
//! - When two prefixes produce the same key, the earlier prefix in the policy wins,
//!   independent of the order in which variables were enumerated.
//! - Reserved control keys (`profile`, `config`) never reach the overlay.

use std::collections::BTreeMap;

use tracing::trace;

use crate::coerce::coerce_value;
use crate::constants::{DAPP_ENV_PREFIX, FOUNDRY_ENV_PREFIX, RESERVED_ENV_KEYS};

/// Read a process environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// An immutable snapshot of environment variables.
///
/// Resolution never consults `std::env` directly; callers capture the process
/// environment once with [`Env::from_process`] or build one from a map in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<String, String>,
}

impl Env {
    /// An environment with no variables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Raw value of `key`, exactly as set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of `key`, or None if unset, empty, or whitespace-only.
    pub fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string).and_then(non_blank)
    }

    /// Return a copy of this snapshot with `key` set to `value`.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Iterate over all variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builds the environment overlay from prefixed variables.
#[derive(Debug, Clone)]
pub struct EnvOverlay {
    prefixes: Vec<String>,
}

impl Default for EnvOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvOverlay {
    /// Overlay using `FOUNDRY_` then `DAPP_`; `FOUNDRY_` wins on collision.
    pub fn new() -> Self {
        Self::with_prefixes([FOUNDRY_ENV_PREFIX, DAPP_ENV_PREFIX])
    }

    /// Overlay using a custom prefix list; earlier prefixes take precedence.
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The prefixes in precedence order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Map a variable name to its configuration key, if it carries a known prefix.
    ///
    /// `FOUNDRY_ETH_RPC_URL` becomes `eth_rpc_url`.
    pub fn key_for(&self, var: &str) -> Option<String> {
        self.prefixes.iter().find_map(|prefix| key_for_prefix(prefix, var))
    }

    /// Collect the overlay table from `env`.
    pub fn collect(&self, env: &Env) -> toml::Table {
        let mut overlay = toml::Table::new();

        // Lowest precedence first, so higher-precedence prefixes overwrite.
        for prefix in self.prefixes.iter().rev() {
            for (var, raw) in env.iter() {
                let Some(key) = key_for_prefix(prefix, var) else {
                    continue;
                };
                if RESERVED_ENV_KEYS.contains(&key.as_str()) || raw.trim().is_empty() {
                    continue;
                }
                trace!(var, key = %key, "environment override");
                overlay.insert(key, coerce_value(raw));
            }
        }

        overlay
    }
}

fn key_for_prefix(prefix: &str, var: &str) -> Option<String> {
    let rest = var.strip_prefix(prefix)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_lowercase())
}
