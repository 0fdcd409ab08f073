//! Etherscan credential lookup command.

use anyhow::Result;
use foundry_config::{Env, ResolvedConfig, ResolvedEtherscanConfig};
use secrecy::ExposeSecret;

use crate::error::LookupError;

const REDACTED: &str = "********";

pub fn run(resolved: &ResolvedConfig, alias: &str, reveal: bool, env: &Env) -> Result<()> {
    let entry = resolved
        .etherscan(alias, env)?
        .ok_or_else(|| LookupError::UnknownAlias {
            table: "etherscan",
            alias: alias.to_string(),
        })?;
    println!("{}", render(&entry, reveal));
    Ok(())
}

fn render(entry: &ResolvedEtherscanConfig, reveal: bool) -> String {
    let key = if reveal {
        entry.key.expose_secret()
    } else {
        REDACTED
    };
    let mut lines = vec![format!("chain: {}", entry.chain)];
    if let Some(url) = &entry.url {
        lines.push(format!("url: {url}"));
    }
    lines.push(format!("key: {key}"));
    lines.join("\n")
}
