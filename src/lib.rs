//! treesnap: Folder Snapshots
//!
//! Walks a directory tree and produces a single nested, serializable snapshot
//! of its structure, annotating each file with its text, a minified form of
//! it, or a skipped-content sentinel.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scan;
pub mod tree;

pub use error::{AppError, ScanError};
pub use scan::{scan, Scanner};
pub use tree::node::{FileNode, NodeKind};
