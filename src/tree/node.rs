//! Snapshot node types

use serde::{Deserialize, Serialize};

/// A file or directory in a folder snapshot.
///
/// Serializes as `{ "name", "type": "f" | "d", "content" | "children" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Base name (last path segment)
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// File-or-directory payload of a [`FileNode`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    /// A file with its text, transformed text, or the skipped-content sentinel
    #[serde(rename = "f")]
    File { content: String },
    /// A directory with children in first-discovery order
    #[serde(rename = "d")]
    Directory { children: Vec<FileNode> },
}

impl FileNode {
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// File content, or None for directories
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Children slice; empty for files
    pub fn children(&self) -> &[FileNode] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&FileNode> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Resolve a `/`-separated path of names below this node
    pub fn lookup(&self, path: &str) -> Option<&FileNode> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Total number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(FileNode::node_count).sum::<usize>()
    }
}
