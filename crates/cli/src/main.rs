//! forge-config - inspect layered `foundry.toml` configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the active profile via `foundry-config` and print it.
//!
//! Does NOT handle:
//! - Resolution rules (see `crates/config`).
//! - Any network use of resolved RPC URLs or keys.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use foundry_config::load_dotenv;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
