//! Folder Snapshot Tree
//!
//! Represents a scanned folder as a nested tree of files and directories,
//! where each file carries its (possibly transformed) text or a sentinel.

pub mod builder;
pub mod filter;
pub mod minify;
pub mod node;
pub mod path;
pub mod policy;
pub mod walker;
