//! Config file discovery.
//!
//! Responsibilities:
//! - Search the starting directory and its ancestors for the config file.
//! - Honour an override file name or absolute path.
//! - Fall back to the global file under `~/.foundry/`.
//!
//! Does NOT handle:
//! - Reading or parsing the file (see `document.rs`).
//!
//! Invariants:
//! - The current directory and home directory are explicit inputs; they are
//!   captured once by the caller (`ConfigLocator::from_env`) and never re-read.
//! - An absolute override is returned without checking that it exists, so a
//!   missing file surfaces as a read error rather than a silent fallback.
//! - Not finding a file is not an error.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, GLOBAL_CONFIG_DIR};
use crate::env::Env;

/// Locates the configuration file for a project.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    root: PathBuf,
    home: Option<PathBuf>,
    file_override: Option<PathBuf>,
}

impl ConfigLocator {
    /// Search upwards from `root`, without a home fallback or override.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            home: None,
            file_override: None,
        }
    }

    /// Capture the current directory, home directory and `FOUNDRY_CONFIG` once.
    pub fn from_env(env: &Env) -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self {
            root,
            home,
            file_override: env.get_non_empty(CONFIG_PATH_ENV).map(PathBuf::from),
        }
    }

    /// Set the directory the search starts from.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the home directory used for the global fallback.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self
    }

    /// Override the file name (relative) or file path (absolute).
    pub fn with_override(mut self, file: Option<PathBuf>) -> Self {
        self.file_override = file;
        self
    }

    /// The directory the search starts from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The home directory, if known.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// The file name or path being searched for.
    pub fn file_name(&self) -> &Path {
        self.file_override
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// The global config file, `<home>/.foundry/foundry.toml`.
    ///
    /// The name is fixed; a file name override only changes the project search.
    pub fn global_config_file(&self) -> Option<PathBuf> {
        self.home
            .as_ref()
            .map(|home| home.join(GLOBAL_CONFIG_DIR).join(DEFAULT_CONFIG_FILE))
    }

    /// Find the config file, or `None` if there is none to use.
    pub fn locate(&self) -> Option<PathBuf> {
        let name = self.file_name();

        if name.is_absolute() {
            debug!(path = %name.display(), "using absolute config override");
            return Some(name.to_path_buf());
        }

        if let Some(found) = find_upwards(&self.root, name) {
            debug!(path = %found.display(), "found config file");
            return Some(found);
        }

        if let Some(global) = self.global_config_file().filter(|p| p.is_file()) {
            debug!(path = %global.display(), "using global config file");
            return Some(global);
        }

        debug!(root = %self.root.display(), "no config file found");
        None
    }
}

/// Look for `name` in `start` and then each ancestor directory.
pub fn find_upwards(start: &Path, name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
