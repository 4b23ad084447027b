//! Clearout - Build Artifact Cleaner
//!
//! Clearout removes build-artifact directories and files from software project
//! trees. A directory is classified against a fixed, ordered set of cleaning
//! definitions (Maven, Grails 2, and a `.clean.yml`-driven rule); every
//! definition that matches resolves its delete-glob list into concrete paths
//! and hands them to a best-effort deletion executor. A read-only mode reports
//! what would be deleted without mutating the filesystem, and a recursive mode
//! applies the same pass to every subdirectory.
//!
//! Cleanup is advisory tooling, not a transaction: deletion failures are
//! logged at debug level and swallowed, and a file needed by a match predicate
//! that cannot be read simply makes the predicate false.

pub mod cleaner;
pub mod config;
pub mod definitions;
pub mod delete;
pub mod globs;

// Re-export commonly used items
pub use cleaner::Cleaner;
pub use config::{Mode, YamlConfig};
pub use definitions::{matchers, Definition, Registry};
pub use delete::Wiper;
pub use globs::resolve;
