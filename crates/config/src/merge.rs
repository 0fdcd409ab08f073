//! Table overlay rules.
//!
//! Responsibilities:
//! - Overlay one table onto another key by key.
//! - Recurse into nested tables so grouped settings merge at every level.
//! - Merge alias tables (`rpc_endpoints`, `etherscan`) alias by alias.
//!
//! Invariants:
//! - Keys absent from the overlay keep their base value.
//! - Arrays and scalars are replaced, never concatenated.
//! - An alias present in the overlay replaces the whole base alias entry.

use toml::{Table, Value};

use crate::constants::ALIAS_TABLES;

/// Overlay `overlay` onto `base` using the resolution rules.
pub fn merge_profile(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        if ALIAS_TABLES.contains(&key.as_str()) {
            merge_aliases(base, key, value);
        } else {
            merge_entry(base, key, value);
        }
    }
}

/// Recursively overlay `overlay` onto `base`.
pub fn merge_into(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        merge_entry(base, key, value);
    }
}

fn merge_entry(base: &mut Table, key: String, value: Value) {
    let incoming = match value {
        Value::Table(incoming) => incoming,
        other => {
            base.insert(key, other);
            return;
        }
    };
    if let Some(Value::Table(existing)) = base.get_mut(&key) {
        merge_into(existing, incoming);
        return;
    }
    base.insert(key, Value::Table(incoming));
}

fn merge_aliases(base: &mut Table, key: String, value: Value) {
    let incoming = match value {
        Value::Table(incoming) => incoming,
        other => {
            base.insert(key, other);
            return;
        }
    };
    if let Some(Value::Table(existing)) = base.get_mut(&key) {
        existing.extend(incoming);
        return;
    }
    base.insert(key, Value::Table(incoming));
}
