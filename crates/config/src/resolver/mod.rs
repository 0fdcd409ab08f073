//! Layered configuration resolution.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigResolver` that merges built-in defaults,
//!   `foundry.toml` profiles and prefixed environment variables.
//! - Produce an immutable `ResolvedConfig` with typed and untyped views.
//!
//! Does NOT handle:
//! - Loading `.env` files (see `dotenv.rs`; binaries call it before capturing `Env`).
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over every file value.
//! - The environment is read from an `Env` snapshot, never from the process
//!   during resolution.

mod builder;
mod resolved;

pub use builder::ConfigResolver;
pub use resolved::ResolvedConfig;

#[cfg(test)]
mod tests;
