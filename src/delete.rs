//! Best-effort deletion of resolved paths.

use crate::config::Mode;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Executes (or, in read-only mode, reports) deletions.
///
/// Deletion is advisory: a failed attempt is logged at debug level and
/// swallowed, never surfaced to the caller. Every requested path is recorded
/// so a run can be summarized afterwards; in read-only mode the recorded set
/// equals the set of deletions a real run would attempt on the same tree.
pub struct Wiper {
    mode: Mode,
    requested: Vec<PathBuf>,
}

impl Wiper {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            requested: Vec::new(),
        }
    }

    /// Delete a single file.
    pub fn file(&mut self, path: &Path) {
        self.requested.push(path.to_path_buf());
        if self.mode.readonly {
            info!("File '{}' can be deleted.", path.display());
        } else {
            info!("Deleting '{}'", path.display());
            if let Err(err) = fs::remove_file(path) {
                debug!("Unable to delete file '{}': {}", path.display(), err);
            }
        }
    }

    /// Delete a directory and everything beneath it.
    pub fn directory(&mut self, path: &Path) {
        self.requested.push(path.to_path_buf());
        if self.mode.readonly {
            info!("Directory '{}' can be deleted.", path.display());
        } else {
            info!("Deleting '{}'", path.display());
            if let Err(err) = fs::remove_dir_all(path) {
                debug!("Unable to delete directory '{}': {}", path.display(), err);
            }
        }
    }

    /// Every path a deletion was requested for, in request order.
    pub fn requested(&self) -> &[PathBuf] {
        &self.requested
    }
}
