use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use super::layout::compute_tree_structure;
use super::{is_ignored, EntryKind, TreeEntry};
use crate::error::ListingError;

/// Entry data collected during filesystem traversal, before layout computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawEntry {
    pub depth: usize,
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// One item of a depth-first walk, decoupled from walkdir's types.
#[derive(Debug)]
pub(crate) enum Visit {
    Entry {
        depth: usize,
        path: PathBuf,
        is_dir: bool,
    },
    /// `depth` and `path` are those walkdir attaches to the error: the failed
    /// directory itself for a failed listing, the child for anything else.
    Failed {
        depth: usize,
        path: Option<PathBuf>,
        error: ListingError,
    },
}

impl From<walkdir::Result<walkdir::DirEntry>> for Visit {
    fn from(result: walkdir::Result<walkdir::DirEntry>) -> Self {
        let err = match result {
            Ok(entry) => {
                return Visit::Entry {
                    depth: entry.depth(),
                    path: entry.path().to_path_buf(),
                    is_dir: entry.file_type().is_dir(),
                }
            }
            Err(err) => err,
        };
        match err.path() {
            // A dangling symlink is listed like any other non-directory.
            Some(path) if is_dangling_link(path, &err) => Visit::Entry {
                depth: err.depth(),
                path: path.to_path_buf(),
                is_dir: false,
            },
            path => Visit::Failed {
                depth: err.depth(),
                path: path.map(Path::to_path_buf),
                error: ListingError::from(&err),
            },
        }
    }
}

fn is_dangling_link(path: &Path, err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
        && fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}

/// Build the tree from a root path.
///
/// The root is the first entry (depth 0). Returns an empty list when the
/// root's own name is ignored.
pub fn build_tree(root: &Path) -> Vec<TreeEntry> {
    // Byte-order sort on the raw file name. Symlinks are followed; walkdir
    // reports a link back to an ancestor as an error instead of looping.
    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();

    // filter_entry also prunes the subtree, so ignored directories are never
    // opened. It is applied to the root as well.
    let iter = walker.into_iter().filter_entry(|entry| {
        if is_ignored(entry.file_name()) {
            trace!(path = %entry.path().display(), "skipping ignored entry");
            return false;
        }
        true
    });

    compute_tree_structure(&collect_raw(iter.map(Visit::from)))
}

/// Turn walk items into pre-order rows.
///
/// A failure on the directory that was just yielded means its children could
/// not be listed: the diagnostic goes one level below it. Any other failure
/// belongs to a single child and takes that child's place.
pub(crate) fn collect_raw(visits: impl IntoIterator<Item = Visit>) -> Vec<RawEntry> {
    let mut raw_entries: Vec<RawEntry> = Vec::new();
    let mut last_dir: Option<(PathBuf, usize)> = None;

    for visit in visits {
        match visit {
            Visit::Entry { depth, path, is_dir } => {
                let name = display_name(&path);
                // Errors bypass filter_entry, so dangling links need the check here.
                if depth > 0 && is_ignored(path.file_name().unwrap_or_default()) {
                    continue;
                }
                if is_dir {
                    last_dir = Some((path.clone(), depth));
                }
                raw_entries.push(RawEntry {
                    depth,
                    name,
                    path,
                    kind: if is_dir { EntryKind::Dir } else { EntryKind::File },
                });
            }
            Visit::Failed { depth, path, error } => {
                let listing_failed = matches!(
                    (&path, &last_dir),
                    (Some(p), Some((dir, dir_depth))) if p == dir && *dir_depth == depth
                );
                let path = path.unwrap_or_default();
                debug!(path = %path.display(), %error, listing_failed, "walk error");

                if listing_failed {
                    raw_entries.push(RawEntry {
                        depth: depth + 1,
                        name: String::new(),
                        path,
                        kind: EntryKind::Error(error),
                    });
                    continue;
                }
                if path.file_name().is_some_and(is_ignored) {
                    continue;
                }
                raw_entries.push(RawEntry {
                    depth,
                    name: path.file_name().map(|_| display_name(&path)).unwrap_or_default(),
                    path,
                    kind: EntryKind::Error(error),
                });
            }
        }
    }

    raw_entries
}
