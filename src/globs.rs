//! Glob expansion rooted at a project directory.

use log::debug;
use std::path::{Path, PathBuf};

/// Expand `pattern` relative to `root` into the matching filesystem paths.
///
/// Supports literal patterns (`target`) and recursive wildcards
/// (`**/*.log`, meaning "any entry at any depth below `root` whose name
/// matches `*.log`"). The iterator is lazy and finite, yields nothing when
/// `root` does not exist or nothing matches, and never fails: an invalid
/// pattern or an unreadable entry is logged at debug level and skipped.
///
/// Known limitation: there is no symlink-loop protection, so a cyclic
/// symlink under `root` can cause a recursive pattern to never terminate.
pub fn resolve(root: &Path, pattern: &str) -> impl Iterator<Item = PathBuf> {
    // The root is a literal path, not a pattern: escape it so metacharacters
    // in directory names ([, ?, *) neither suppress matches nor let the
    // expansion reach outside the root.
    let escaped = glob::Pattern::escape(&root.to_string_lossy());
    let full = Path::new(&escaped)
        .join(pattern)
        .to_string_lossy()
        .into_owned();
    let paths = match glob::glob(&full) {
        Ok(paths) => Some(paths),
        Err(err) => {
            debug!("Invalid glob pattern '{}': {}", pattern, err);
            None
        }
    };
    paths.into_iter().flatten().filter_map(|entry| match entry {
        Ok(path) => Some(path),
        Err(err) => {
            debug!("Unable to read glob entry: {}", err);
            None
        }
    })
}
