//! Snapshot output: JSON rendering, persistence, and summary counts.

use crate::error::AppError;
use crate::tree::node::{FileNode, NodeKind};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Render a snapshot as JSON
pub fn to_json(node: &FileNode, pretty: bool) -> Result<String, AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(node)?
    } else {
        serde_json::to_string(node)?
    };
    Ok(json)
}

/// Write a snapshot to `path`, creating parent directories as needed
pub fn write_snapshot(node: &FileNode, path: &Path, pretty: bool) -> Result<(), AppError> {
    let json = to_json(node, pretty)?;
    let io_err = |source| AppError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, json.as_bytes()).map_err(io_err)?;

    info!(path = %path.display(), bytes = json.len(), "Snapshot written");
    Ok(())
}

/// Read a snapshot back from a JSON file
pub fn read_snapshot(path: &Path) -> Result<FileNode, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Node counts for a snapshot (root excluded)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotStats {
    pub directories: usize,
    pub files: usize,
    pub skipped: usize,
}

impl SnapshotStats {
    /// Count directories, files with content, and files carrying `sentinel`
    pub fn collect(root: &FileNode, sentinel: &str) -> Self {
        let mut stats = Self::default();
        for child in root.children() {
            stats.visit(child, sentinel);
        }
        stats
    }

    fn visit(&mut self, node: &FileNode, sentinel: &str) {
        match &node.kind {
            NodeKind::File { content } if content == sentinel => self.skipped += 1,
            NodeKind::File { .. } => self.files += 1,
            NodeKind::Directory { children } => {
                self.directories += 1;
                for child in children {
                    self.visit(child, sentinel);
                }
            }
        }
    }
}
