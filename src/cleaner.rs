//! Depth-first traversal driving the cleaning definitions.

use crate::config::Mode;
use crate::definitions::{matchers, Registry};
use crate::delete::Wiper;
use log::debug;
use std::fs;
use std::path::Path;

/// Walks a directory tree and runs every matching cleaning definition.
///
/// Traversal is single-threaded and synchronous; subdirectory cleanups are
/// independent and their failures never propagate upwards. Directory state is
/// re-read on every visit, so a tree modified concurrently by another process
/// is an accepted race rather than an error.
pub struct Cleaner {
    mode: Mode,
    registry: Registry,
}

impl Cleaner {
    pub fn new(mode: Mode) -> Self {
        Self::with_registry(mode, Registry::builtin())
    }

    pub fn with_registry(mode: Mode, registry: Registry) -> Self {
        Self { mode, registry }
    }

    /// Clean `dir`, and every descendant directory when the mode is recursive.
    pub fn run(&self, wiper: &mut Wiper, dir: &Path) {
        // Entry-point guarantee: a Maven root always gets its target removed,
        // even before the generic definitions run.
        if matchers::file_exists(dir, "pom.xml") {
            wiper.directory(&dir.join("target"));
        }

        for definition in self.registry.definitions() {
            if definition.matches(dir) {
                definition.clean(wiper, dir);
            }
        }

        if self.mode.recursive {
            match fs::read_dir(dir) {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        let path = entry.path();
                        if path.is_dir() {
                            self.run(wiper, &path);
                        }
                    }
                }
                Err(err) => {
                    debug!("Unable to list {}: {}", dir.display(), err);
                }
            }
        }

        debug!("Finished {}", dir.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn run(dir: &Path, mode: Mode) -> Vec<PathBuf> {
        let mut wiper = Wiper::new(mode);
        Cleaner::new(mode).run(&mut wiper, dir);
        wiper.requested().to_vec()
    }

    #[test]
    fn maven_target_requested_even_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pom.xml"), b"<project/>").unwrap();

        let requested = run(dir.path(), Mode::default());
        assert!(requested.contains(&dir.path().join("target")));
    }

    #[test]
    fn non_recursive_mode_ignores_children() {
        let dir = tempfile::tempdir().unwrap();
        let child = dir.path().join("child");
        fs::create_dir_all(child.join("target")).unwrap();
        fs::write(child.join("pom.xml"), b"<project/>").unwrap();

        run(dir.path(), Mode::default());
        assert!(child.join("target").exists());
    }

    #[test]
    fn recursive_mode_visits_every_descendant() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a", "a/nested", "b"] {
            let project = dir.path().join(name);
            fs::create_dir_all(project.join("target")).unwrap();
            fs::write(project.join("pom.xml"), b"<project/>").unwrap();
        }

        let mode = Mode {
            readonly: false,
            recursive: true,
        };
        run(dir.path(), mode);
        assert!(!dir.path().join("a/target").exists());
        assert!(!dir.path().join("a/nested/target").exists());
        assert!(!dir.path().join("b/target").exists());
    }
}
