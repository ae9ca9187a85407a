#![forbid(unsafe_code)]
//! dirtree: print a directory as a color-coded tree, skipping dependency
//! caches, build output, and version-control metadata.

pub mod cli;
pub mod error;
pub mod render;
pub mod terminal;
pub mod tree;
