//! RPC endpoint lookup command.

use anyhow::Result;
use foundry_config::{Env, ResolvedConfig};

use crate::error::LookupError;

pub fn run(resolved: &ResolvedConfig, alias: Option<&str>, env: &Env) -> Result<()> {
    let url = match alias {
        Some(alias) => resolved
            .rpc_url(alias, env)?
            .ok_or_else(|| LookupError::UnknownAlias {
                table: "rpc_endpoints",
                alias: alias.to_string(),
            })?,
        None => resolved.eth_rpc_url(env)?.ok_or(LookupError::NoDefaultRpc)?,
    };
    println!("{url}");
    Ok(())
}
