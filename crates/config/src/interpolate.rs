//! `${VAR}` substitution inside string values.
//!
//! Responsibilities:
//! - Replace `${NAME}` placeholders with values from an `Env` snapshot.
//! - Walk arrays and tables so every string leaf is eligible.
//! - Report the owning key (dotted path) when a variable is missing.
//!
//! Invariants:
//! - Substituted values are inserted verbatim and never re-scanned.
//! - Strings without placeholders are returned untouched.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use toml::Value;

use crate::env::Env;
use crate::error::ConfigError;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}").expect("placeholder regex is valid")
});

/// Whether `s` contains at least one `${VAR}` placeholder.
pub fn has_placeholder(s: &str) -> bool {
    PLACEHOLDER.is_match(s)
}

/// Names of all variables referenced by `s`, in order of appearance.
pub fn placeholders(s: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(s)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Substitute every placeholder in `s`; `key` names the owning setting in errors.
pub fn interpolate<'a>(s: &'a str, key: &str, env: &Env) -> Result<Cow<'a, str>, ConfigError> {
    if let Some(var) = placeholders(s).into_iter().find(|var| env.get(var).is_none()) {
        return Err(ConfigError::MissingInterpolationVariable {
            var: var.to_string(),
            key: key.to_string(),
        });
    }

    Ok(PLACEHOLDER.replace_all(s, |caps: &Captures<'_>| {
        env.get(&caps[1]).unwrap_or_default().to_string()
    }))
}

/// Interpolate every string leaf under `value`, in place.
pub fn interpolate_value(value: &mut Value, key: &str, env: &Env) -> Result<(), ConfigError> {
    match value {
        Value::String(s) if has_placeholder(s) => {
            let replaced = interpolate(s, key, env)?.into_owned();
            *s = replaced;
        }
        Value::String(_) => {}
        Value::Array(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                interpolate_value(item, &format!("{key}[{i}]"), env)?;
            }
        }
        Value::Table(table) => {
            for (child, item) in table.iter_mut() {
                interpolate_value(item, &format!("{key}.{child}"), env)?;
            }
        }
        Value::Integer(_) | Value::Float(_) | Value::Boolean(_) | Value::Datetime(_) => {}
    }
    Ok(())
}

/// Interpolate every top-level entry of `table` except `skip`.
pub fn interpolate_table(
    table: &mut toml::Table,
    skip: &[&str],
    env: &Env,
) -> Result<(), ConfigError> {
    for (key, value) in table.iter_mut() {
        if skip.contains(&key.as_str()) {
            continue;
        }
        interpolate_value(value, key, env)?;
    }
    Ok(())
}
