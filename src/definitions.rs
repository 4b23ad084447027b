//! Cleaning definitions: which directories match, and what to delete there.

use crate::config::{YamlConfig, CONFIG_FILE};
use crate::delete::Wiper;
use crate::globs;
use log::info;
use std::path::Path;

/// Match predicates shared by the cleaning definitions.
///
/// Matching is best-effort: a file that cannot be read makes the predicate
/// false instead of raising, so an unreadable marker never blocks a run.
pub mod matchers {
    use log::debug;
    use regex::Regex;
    use std::fs;
    use std::path::Path;

    /// True if `name` exists directly inside `dir`.
    pub fn file_exists(dir: &Path, name: &str) -> bool {
        dir.join(name).exists()
    }

    /// True if `name` exists inside `dir` and its contents contain `needle`
    /// (case-sensitive substring).
    pub fn file_contains(dir: &Path, name: &str, needle: &str) -> bool {
        read_marker(dir, name).is_some_and(|text| text.contains(needle))
    }

    /// True if `name` exists inside `dir` and its contents match `pattern`.
    pub fn file_matches(dir: &Path, name: &str, pattern: &Regex) -> bool {
        read_marker(dir, name).is_some_and(|text| pattern.is_match(&text))
    }

    fn read_marker(dir: &Path, name: &str) -> Option<String> {
        let path = dir.join(name);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) => {
                debug!("Unable to read {}: {}", path.display(), err);
                None
            }
        }
    }
}

/// A named cleaning rule for one project convention.
///
/// Each variant pairs a match predicate with a list of delete globs; the
/// YAML variant takes its globs from the project's `.clean.yml` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition {
    /// `pom.xml` present: delete `target`.
    Maven,
    /// `application.properties` mentions `app.grails.version`: delete
    /// `target` and every `*.log` underneath.
    Grails2,
    /// `.clean.yml` present: delete the globs it lists.
    Yaml,
}

impl Definition {
    pub fn name(&self) -> &'static str {
        match self {
            Definition::Maven => "Maven",
            Definition::Grails2 => "Grails 2",
            Definition::Yaml => CONFIG_FILE,
        }
    }

    /// Does this definition apply to `dir`?
    pub fn matches(&self, dir: &Path) -> bool {
        match self {
            Definition::Maven => matchers::file_exists(dir, "pom.xml"),
            Definition::Grails2 => {
                matchers::file_contains(dir, "application.properties", "app.grails.version")
            }
            Definition::Yaml => matchers::file_exists(dir, CONFIG_FILE),
        }
    }

    /// Run this definition's clean action against `dir`.
    ///
    /// The match is re-verified first, so a stale match result from an
    /// earlier pass cannot cause deletions after the directory changed.
    pub fn clean(&self, wiper: &mut Wiper, dir: &Path) {
        if !self.matches(dir) {
            return;
        }
        info!("[{}]: {}", self.name(), dir.display());
        match self {
            Definition::Maven => delete_globs(wiper, dir, &["target"]),
            Definition::Grails2 => delete_globs(wiper, dir, &["target", "**/*.log"]),
            Definition::Yaml => {
                // Load failure is equivalent to the file being absent.
                if let Some(config) = YamlConfig::load(&dir.join(CONFIG_FILE)) {
                    delete_globs(wiper, dir, &config.deletes);
                }
            }
        }
    }
}

/// Resolve each glob against `dir` and request deletion of every hit.
fn delete_globs<S: AsRef<str>>(wiper: &mut Wiper, dir: &Path, patterns: &[S]) {
    for pattern in patterns {
        for path in globs::resolve(dir, pattern.as_ref()) {
            if path.is_dir() {
                wiper.directory(&path);
            } else {
                wiper.file(&path);
            }
        }
    }
}

/// The ordered, fixed list of built-in cleaning definitions.
///
/// Order only determines log ordering: every matching definition executes
/// for a directory, independently of the others.
pub struct Registry {
    definitions: Vec<Definition>,
}

impl Registry {
    pub fn builtin() -> Self {
        Self {
            definitions: vec![Definition::Maven, Definition::Grails2, Definition::Yaml],
        }
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
