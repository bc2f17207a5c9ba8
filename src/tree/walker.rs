//! Filesystem walker for traversing directory structures

use crate::error::ScanError;
use crate::tree::filter::PathFilter;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Whether an entry is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single filesystem entry yielded by the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Filesystem walker
///
/// Yields every descendant of the root, directories before their contents.
/// Symlinks are reported by their target's kind but never followed into.
pub struct Walker {
    root: PathBuf,
    filter: PathFilter,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            filter: PathFilter::default(),
        }
    }

    /// Prune entries the filter rejects, so skipped directories are not descended
    pub fn with_filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Walk the filesystem lazily. Siblings are sorted by file name so
    /// repeated walks yield the same order.
    pub fn entries(&self) -> impl Iterator<Item = Result<Entry, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.filter.should_skip(entry.path(), &self.root))
            .map(|entry| {
                let entry = entry.map_err(|e| ScanError::from_walk(e, &self.root))?;
                classify(&entry)
            })
    }

    /// Walk the filesystem and collect all entries
    pub fn walk(&self) -> Result<Vec<Entry>, ScanError> {
        self.entries().collect()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Stat an entry once to decide file vs directory.
fn classify(entry: &DirEntry) -> Result<Entry, ScanError> {
    let path = entry.path().to_path_buf();
    let file_type = entry.file_type();

    let is_dir = if file_type.is_symlink() {
        let metadata = std::fs::metadata(&path).map_err(|e| ScanError::Walk {
            path: path.clone(),
            source: e,
        })?;
        trace!(path = %path.display(), is_dir = metadata.is_dir(), "Resolved symlink");
        metadata.is_dir()
    } else {
        file_type.is_dir()
    };

    Ok(if is_dir {
        Entry::directory(path)
    } else {
        Entry::file(path)
    })
}
