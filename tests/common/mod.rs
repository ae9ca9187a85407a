#![allow(dead_code)]

use dirtree::render::{line_to_plain_text, tree_to_lines};
use dirtree::tree::TreeEntry;
use std::fs;
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path(), paths);
    tmp
}

/// Same as [`create_fixture`], but under a directory named `root` inside the
/// temp dir so the root line is predictable. Returns the temp dir guard.
pub fn create_named_fixture(root: &str, paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join(root);
    fs::create_dir(&base).unwrap();
    populate(&base, paths);
    tmp
}

fn populate(base: &std::path::Path, paths: &[&str]) {
    for p in paths {
        let full = base.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
}

/// Render entries to plain text, one string per line.
pub fn plain_lines(entries: &[TreeEntry]) -> Vec<String> {
    tree_to_lines(entries).iter().map(line_to_plain_text).collect()
}

/// Names of the entries at `depth`, in output order.
pub fn names_at_depth(entries: &[TreeEntry], depth: usize) -> Vec<&str> {
    entries
        .iter()
        .filter(|e| e.depth == depth)
        .map(|e| e.name.as_str())
        .collect()
}

/// Remove CSI escape sequences (`ESC [ ... final-byte`) from terminal output.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
