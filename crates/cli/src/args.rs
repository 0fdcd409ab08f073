//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read `FOUNDRY_PROFILE` and `FOUNDRY_CONFIG` as flag fallbacks.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve configuration (see `foundry_config::ConfigResolver`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forge-config")]
#[command(about = "Inspect layered foundry.toml configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  forge-config show\n  forge-config --profile ci show --json\n  forge-config get optimizer_runs\n  forge-config rpc mainnet\n  forge-config etherscan optimism\n"
)]
pub struct Cli {
    /// Directory to start the config file search from (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file name or path (overrides the default `foundry.toml`)
    #[arg(long, global = true, env = "FOUNDRY_CONFIG", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Profile to resolve
    #[arg(long, global = true, env = "FOUNDRY_PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved profile
    Show {
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Print a single value by key (dotted keys reach into tables)
    Get {
        /// Key to look up, e.g. `optimizer_runs` or `rpc_storage_caching.chains`
        key: String,
    },

    /// Print the config file in use, or nothing if defaults are used
    Path,

    /// Print an RPC endpoint with placeholders resolved
    Rpc {
        /// Alias from `[rpc_endpoints]`; `eth_rpc_url` is used when omitted
        alias: Option<String>,
    },

    /// Print an Etherscan entry with placeholders resolved
    Etherscan {
        /// Alias from `[etherscan]`
        alias: String,

        /// Print the API key instead of redacting it
        #[arg(long)]
        reveal: bool,
    },
}
