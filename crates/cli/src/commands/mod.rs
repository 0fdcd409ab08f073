//! CLI command implementations.
//!
//! Responsibilities:
//! - Render resolved configuration to stdout for each subcommand.
//!
//! Does NOT handle:
//! - Resolution or flag handling (see `dispatch` module).

pub mod etherscan;
pub mod get;
pub mod path;
pub mod rpc;
pub mod show;
