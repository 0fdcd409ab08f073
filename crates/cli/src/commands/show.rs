//! Resolved profile display command.

use anyhow::{Context, Result};
use foundry_config::ResolvedConfig;

pub fn run(resolved: &ResolvedConfig, json: bool) -> Result<()> {
    let output = if json {
        serde_json::to_string_pretty(resolved.config())
            .context("Failed to serialize configuration to JSON")?
    } else {
        resolved.to_toml_string()?
    };
    println!("{}", output.trim_end());
    Ok(())
}
