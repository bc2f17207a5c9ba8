//! Tree builder: merges a flat stream of walk entries into a nested snapshot

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::tree::filter::PathFilter;
use crate::tree::node::{FileNode, NodeKind};
use crate::tree::path;
use crate::tree::policy::{ContentPolicy, ContentSource, FsContentSource};
use crate::tree::walker::Entry;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Incrementally builds a [`FileNode`] tree rooted at `root`.
///
/// Entries may arrive in any order. Missing ancestors are created as
/// directories on demand, and an entry whose node already exists is a no-op.
pub struct TreeBuilder<S: ContentSource = FsContentSource> {
    root_path: PathBuf,
    root: FileNode,
    filter: PathFilter,
    policy: ContentPolicy,
    source: S,
}

impl TreeBuilder<FsContentSource> {
    /// Create a new tree builder reading file content from disk
    pub fn new(root_path: PathBuf, config: &ScanConfig) -> Self {
        Self::with_source(root_path, config, FsContentSource)
    }
}

impl<S: ContentSource> TreeBuilder<S> {
    /// Create a tree builder with a custom content source
    pub fn with_source(root_path: PathBuf, config: &ScanConfig, source: S) -> Self {
        let root = FileNode::directory(path::root_name(&root_path));
        Self {
            root_path,
            root,
            filter: PathFilter::from_config(config),
            policy: ContentPolicy::from_config(config),
            source,
        }
    }

    /// Insert one walk entry, creating any missing nodes along its path.
    ///
    /// Returns true if the entry passed the path filter.
    pub fn insert(&mut self, entry: &Entry) -> Result<bool, ScanError> {
        if self.filter.should_skip(&entry.path, &self.root_path) {
            trace!(path = %entry.path.display(), "Skipping filtered entry");
            return Ok(false);
        }

        let relative = path::relative_to(&entry.path, &self.root_path).ok_or_else(|| {
            ScanError::InvalidPath(format!(
                "{:?} is not under scan root {:?}",
                entry.path, self.root_path
            ))
        })?;
        let segments = path::segments(relative);
        let Some((last, ancestors)) = segments.split_last() else {
            return Ok(true);
        };

        let mut current = &mut self.root;
        for segment in ancestors {
            current = child_or_insert_with(current, segment, &entry.path, || {
                Ok(FileNode::directory(segment.as_str()))
            })?;
        }

        let policy = &self.policy;
        let source = &self.source;
        child_or_insert_with(current, last, &entry.path, || {
            if entry.is_file() {
                let content = policy.content_for(&entry.path, source)?;
                Ok(FileNode::file(last.as_str(), content))
            } else {
                Ok(FileNode::directory(last.as_str()))
            }
        })?;

        Ok(true)
    }

    /// Insert every entry of a walk, stopping at the first failure
    pub fn extend<I>(&mut self, entries: I) -> Result<usize, ScanError>
    where
        I: IntoIterator<Item = Result<Entry, ScanError>>,
    {
        let mut inserted = 0;
        for entry in entries {
            if self.insert(&entry?)? {
                inserted += 1;
            }
        }
        debug!(inserted, "Merged entries into tree");
        Ok(inserted)
    }

    /// The tree built so far
    pub fn root(&self) -> &FileNode {
        &self.root
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Finish building and hand over the tree
    pub fn finish(self) -> FileNode {
        self.root
    }
}

/// Find the child named `name` under `parent`, appending a new node built by
/// `create` when absent. `create` runs at most once per node, so file content
/// is never read twice.
fn child_or_insert_with<'a, F>(
    parent: &'a mut FileNode,
    name: &str,
    entry_path: &std::path::Path,
    create: F,
) -> Result<&'a mut FileNode, ScanError>
where
    F: FnOnce() -> Result<FileNode, ScanError>,
{
    let NodeKind::Directory { children } = &mut parent.kind else {
        return Err(ScanError::PathConflict(entry_path.to_path_buf()));
    };

    let index = match children.iter().position(|c| c.name == name) {
        Some(index) => index,
        None => {
            children.push(create()?);
            children.len() - 1
        }
    };
    Ok(&mut children[index])
}
