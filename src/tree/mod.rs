//! Tree building, filtering, sorting, and layout computation.

mod layout;
pub(crate) mod walk;

use crate::error::ListingError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub use walk::build_tree;

/// Directory names that are never listed or descended into.
pub const IGNORED_NAMES: &[&str] = &[
    "node_modules",
    ".next",
    ".git",
    "dist",
    "build",
    ".cache",
    "__pycache__",
    "venv",
];

/// Connector for the last sibling in a group.
pub const LAST_CONNECTOR: &str = "\u{2514}\u{2500}\u{2500} "; // └──
/// Connector for every other sibling.
pub const MID_CONNECTOR: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
/// Rail token below an ancestor that still has siblings to come.
pub const RAIL: &str = "\u{2502}   "; // │
/// Rail token below an ancestor that was the last sibling.
pub const BLANK: &str = "    ";

/// Exact-name check against [`IGNORED_NAMES`].
pub fn is_ignored(name: &OsStr) -> bool {
    IGNORED_NAMES.iter().any(|ignored| OsStr::new(ignored) == name)
}

/// What a row in the tree stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    /// Either a directory's children could not be listed (unnamed row one
    /// level below it) or a single child could not be examined.
    Error(ListingError),
}

/// A single entry in the rendered directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Display name (filename component only). Empty for listing-failure rows.
    pub name: String,
    /// Full filesystem path. For listing-failure rows, the directory that failed.
    pub path: PathBuf,
    /// Nesting depth (0 = the root itself).
    pub depth: usize,
    pub kind: EntryKind,
    /// Whether this is the last sibling in its parent group.
    pub is_last: bool,
    /// Pre-computed rail and connector string for tree display.
    pub prefix: String,
}

impl TreeEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Abstraction over tree construction so it can be swapped or mocked.
pub trait TreeBuilder {
    fn build_tree(&self, root: &Path) -> Vec<TreeEntry>;
}

/// Default `TreeBuilder` that delegates to the walkdir-based implementation.
pub struct WalkdirTreeBuilder;

impl TreeBuilder for WalkdirTreeBuilder {
    fn build_tree(&self, root: &Path) -> Vec<TreeEntry> {
        build_tree(root)
    }
}
