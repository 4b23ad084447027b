//! Run mode flags and `.clean.yml` configuration loading.

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the per-project configuration file.
pub const CONFIG_FILE: &str = ".clean.yml";

/// Process-wide cleaning mode, derived from CLI flags.
///
/// Immutable for the lifetime of a run; passed by value into every component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mode {
    /// Report intended deletions without mutating the filesystem.
    pub readonly: bool,
    /// Apply cleanup to every subdirectory, not just the given root.
    pub recursive: bool,
}

/// Per-project cleaning configuration loaded from `.clean.yml`.
///
/// ```yaml
/// deletes:
///   - build
///   - "**/*.tmp"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YamlConfig {
    /// Glob patterns to delete, resolved relative to the project directory.
    #[serde(default)]
    pub deletes: Vec<String>,
}

impl YamlConfig {
    /// Load the configuration from `path`.
    ///
    /// A missing, unreadable, or malformed file yields `None`; the caller
    /// treats that the same as the file being absent.
    pub fn load(path: &Path) -> Option<Self> {
        match Self::read(path) {
            Ok(config) => Some(config),
            Err(err) => {
                debug!("Unable to load {}: {:#}", path.display(), err);
                None
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))
    }
}
