//! `.env` file loading for binaries.
//!
//! Responsibilities:
//! - Load `.env` into the process environment before the environment is captured.
//! - Enforce the `DOTENV_DISABLED` gate so tests stay hermetic.
//!
//! Does NOT handle:
//! - Anything during resolution; the resolver only reads an `Env` snapshot.
//!
//! Invariants:
//! - Missing `.env` files are silently ignored.
//! - Error messages never include raw .env line contents to prevent secret leakage.

use crate::env::env_var_or_none;
use crate::error::ConfigError;

/// Check if dotenv loading is disabled via environment variable.
pub fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none("DOTENV_DISABLED").as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from `.env` in the current directory or its parents.
///
/// If `DOTENV_DISABLED` is set to "true" or "1", nothing is loaded.
///
/// # Errors
///
/// Returns an error if:
/// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
/// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_dotenv_disabled_values() {
        temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
            assert!(dotenv_disabled());
            assert!(load_dotenv().is_ok());
        });
        temp_env::with_vars([("DOTENV_DISABLED", Some("true"))], || {
            assert!(dotenv_disabled());
        });
        temp_env::with_vars([("DOTENV_DISABLED", Some("0"))], || {
            assert!(!dotenv_disabled());
        });
        temp_env::with_vars([("DOTENV_DISABLED", None::<&str>)], || {
            assert!(!dotenv_disabled());
        });
    }

    #[test]
    fn test_not_found_detection() {
        let err = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(is_not_found(&err));
        let err = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(!is_not_found(&err));
    }
}
