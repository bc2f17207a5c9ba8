//! Shared test utilities for integration tests
//!
//! Fixture trees on disk and serialized access to process environment.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;
use treesnap::tree::node::FileNode;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// A scan root inside a temp dir, named so root-name assertions are stable
pub struct Fixture {
    _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Fixture {
    /// Create `<tmp>/<name>` and populate it with `(relative path, content)` files
    pub fn new(name: &str, files: &[(&str, &str)]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(name);
        std::fs::create_dir_all(&root).unwrap();
        for (rel, content) in files {
            write_file(&root, rel, content);
        }
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.root.join(rel)).unwrap();
    }

    /// Temp dir outside the scan root (for output files)
    pub fn scratch(&self) -> &Path {
        self._temp_dir.path()
    }
}

pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Every node name in the subtree, depth first
pub fn all_names(node: &FileNode) -> Vec<String> {
    let mut names = vec![node.name.clone()];
    for child in node.children() {
        names.extend(all_names(child));
    }
    names
}

/// Assert children of every directory have distinct names
pub fn assert_unique_children(node: &FileNode) {
    let mut seen = std::collections::HashSet::new();
    for child in node.children() {
        assert!(
            seen.insert(child.name.as_str()),
            "duplicate child {:?} under {:?}",
            child.name,
            node.name
        );
        assert_unique_children(child);
    }
}

/// Run `f` with the given environment variables set, restoring them afterwards
pub fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
        .collect();
    for (k, v) in vars {
        std::env::set_var(k, v);
    }

    let result = f();

    for (k, v) in saved {
        match v {
            Some(v) => std::env::set_var(&k, v),
            None => std::env::remove_var(&k),
        }
    }
    result
}
