//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for every fatal resolution failure.
//! - Render TOML parser diagnostics with the offending source lines.
//!
//! Does NOT handle:
//! - Value coercion failures (coercion never fails, it falls back to strings).
//! - Missing config files or unknown profiles (absorbed into the defaults path).
//!
//! Invariants:
//! - All error variants carry enough context (path, key, variable) to act on.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    FileNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}{}: {message}\n{context}", line_suffix(.line))]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        message: String,
        context: String,
    },

    #[error("Missing environment variable `{var}` referenced by `{key}`")]
    MissingInterpolationVariable { var: String, key: String },

    #[error("Invalid configuration for profile '{profile}': {message}")]
    InvalidValue { profile: String, message: String },

    #[error("Failed to render configuration as TOML: {0}")]
    Render(#[from] toml::ser::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

impl ConfigError {
    /// Build a `Parse` error from a `toml` diagnostic and the document source.
    pub(crate) fn from_toml(path: PathBuf, err: &toml::de::Error, content: &str) -> Self {
        let line = err
            .span()
            .map(|span| content[..span.start.min(content.len())].matches('\n').count() + 1);
        let context = line
            .map(|line| source_excerpt(content, line))
            .unwrap_or_default();
        Self::Parse {
            path,
            line,
            message: err.message().trim().to_string(),
            context,
        }
    }

    /// The interpolation variable that was missing, if this is that error.
    pub fn missing_variable(&self) -> Option<&str> {
        match self {
            Self::MissingInterpolationVariable { var, .. } => Some(var),
            _ => None,
        }
    }
}

/// Render the line at `line_num` with one line of context on each side.
fn source_excerpt(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if line_num == 0 || line_num > lines.len() {
        return String::new();
    }

    let start = line_num.saturating_sub(2);
    let end = (line_num + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            if num == line_num {
                format!("→ {num:3} | {line}")
            } else {
                format!("  {num:3} | {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
