//! History file discovery.
//!
//! Resolution order: an explicit override (normally `$HISTFILE`) if it
//! exists, then `~/.zsh_history`, then `~/.bash_history`.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::{HistoryError, Result};

/// Environment variable naming an explicit history file.
pub const HISTFILE_ENV: &str = "HISTFILE";

/// Candidate file names probed under the home directory, in order.
const CANDIDATES: [&str; 2] = [".zsh_history", ".bash_history"];

/// Finds the active history file.
///
/// Both inputs are plain values so callers (and tests) decide where they come
/// from; [`Locator::from_env`] wires them to the process environment.
#[derive(Clone, Debug, Default)]
pub struct Locator {
    override_path: Option<PathBuf>,
    home: Option<PathBuf>,
}

impl Locator {
    pub fn new(override_path: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            override_path: override_path.filter(|p| !p.as_os_str().is_empty()),
            home,
        }
    }

    /// Locator reading `$HISTFILE` and the user's home directory.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os(HISTFILE_ENV).map(PathBuf::from),
            dirs::home_dir(),
        )
    }

    /// Resolve the history file path. Only checks existence, never reads.
    pub fn locate(&self) -> Result<PathBuf> {
        if let Some(path) = &self.override_path {
            if path.exists() {
                debug!("Using history override {}", path.display());
                return Ok(path.clone());
            }
            warn!(
                "History override {} does not exist, falling back",
                path.display()
            );
        }

        let home = self
            .home
            .as_deref()
            .ok_or(HistoryError::HomeDirectoryUnavailable)?;

        probe_candidates(home).ok_or(HistoryError::NoHistoryFileFound)
    }
}

fn probe_candidates(home: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|name| home.join(name))
        .find(|candidate| candidate.exists())
}
