//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants and lookup failures to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use foundry_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for forge-config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The config file could not be read or is not valid TOML.
    ///
    /// Scripts should fix the file; retrying will not help.
    ConfigFile = 2,

    /// A `${VAR}` placeholder names an unset variable.
    ///
    /// Scripts should export the variable and retry.
    MissingVariable = 3,

    /// A setting has the wrong type or an invalid value.
    InvalidValue = 4,

    /// The requested key or alias is not configured.
    NotFound = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileNotReadable { .. } | ConfigError::Parse { .. } => ExitCode::ConfigFile,
            ConfigError::MissingInterpolationVariable { .. } => ExitCode::MissingVariable,
            ConfigError::InvalidValue { .. } => ExitCode::InvalidValue,
            ConfigError::Render(_)
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Lookup failures raised by the commands themselves.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Unknown key `{0}`")]
    UnknownKey(String),

    #[error("Unknown {table} alias `{alias}`")]
    UnknownAlias { table: &'static str, alias: String },

    #[error("No `eth_rpc_url` configured; pass an alias from [rpc_endpoints]")]
    NoDefaultRpc,
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.downcast_ref::<LookupError>().is_some() {
                return ExitCode::NotFound;
            }
        }

        ExitCode::GeneralError
    }
}
