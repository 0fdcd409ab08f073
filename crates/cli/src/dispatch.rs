//! Command dispatch logic for the CLI.
//!
//! Responsibilities:
//! - Build a `ConfigResolver` from global flags and the process environment.
//! - Route each subcommand to its handler.
//!
//! Does NOT handle:
//! - Argument parsing (see `args` module).
//! - Output formatting (see `commands` module).

use anyhow::{Context, Result};
use foundry_config::{ConfigResolver, Env};

use crate::args::{Cli, Commands};
use crate::commands;

/// Build a resolver honouring `--root`, `--config-path` and `--profile`.
///
/// Blank flag values are ignored so an empty `FOUNDRY_CONFIG` or
/// `FOUNDRY_PROFILE` falls back to the defaults.
fn build_resolver(cli: &Cli, env: Env) -> Result<ConfigResolver> {
    let mut resolver = ConfigResolver::new(env);

    if let Some(root) = &cli.root {
        let root = std::path::absolute(root)
            .with_context(|| format!("Invalid --root {}", root.display()))?;
        resolver = resolver.with_root(root);
    }
    if let Some(path) = &cli.config_path {
        if !path.to_string_lossy().trim().is_empty() {
            resolver = resolver.with_config_path(path.clone());
        }
    }
    if let Some(profile) = &cli.profile {
        if !profile.trim().is_empty() {
            resolver = resolver.with_profile(profile.clone());
        }
    }

    Ok(resolver)
}

pub fn run_command(cli: Cli) -> Result<()> {
    let env = Env::from_process();
    let resolver = build_resolver(&cli, env.clone())?;

    if let Commands::Path = cli.command {
        commands::path::run(&resolver);
        return Ok(());
    }

    let resolved = resolver
        .resolve()
        .context("Failed to resolve configuration")?;

    match cli.command {
        Commands::Show { json } => commands::show::run(&resolved, json),
        Commands::Get { key } => commands::get::run(&resolved, &key),
        Commands::Rpc { alias } => commands::rpc::run(&resolved, alias.as_deref(), &env),
        Commands::Etherscan { alias, reveal } => {
            commands::etherscan::run(&resolved, &alias, reveal, &env)
        }
        Commands::Path => Ok(()),
    }
}
