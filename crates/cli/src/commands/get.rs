//! Single value lookup command.

use anyhow::Result;
use foundry_config::ResolvedConfig;
use toml::Value;

use crate::error::LookupError;

pub fn run(resolved: &ResolvedConfig, key: &str) -> Result<()> {
    let value = resolved
        .get(key)
        .ok_or_else(|| LookupError::UnknownKey(key.to_string()))?;
    println!("{}", render(value)?);
    Ok(())
}

/// Strings print bare, tables as a TOML document, everything else as a TOML literal.
fn render(value: &Value) -> Result<String> {
    Ok(match value {
        Value::String(s) => s.clone(),
        Value::Table(table) => toml::to_string_pretty(table)?.trim_end().to_string(),
        other => other.to_string(),
    })
}
