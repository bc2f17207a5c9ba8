//! Path filter: decides which entries are left out of the snapshot entirely.

use crate::config::ScanConfig;
use crate::tree::path;
use std::collections::HashSet;
use std::path::Path;

/// Excludes entries by relative-path prefix or by exact base name.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    excluded_paths: Vec<String>,
    skipped_files: HashSet<String>,
}

impl PathFilter {
    pub fn new(
        excluded_paths: Vec<String>,
        skipped_files: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            excluded_paths: excluded_paths.into_iter().filter(|p| !p.is_empty()).collect(),
            skipped_files: skipped_files.into_iter().collect(),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.excluded_paths.clone(), config.skipped_files.clone())
    }

    /// Whether `entry` must be left out of the tree.
    ///
    /// Prefixes are plain string prefixes of the relative path, so `build`
    /// also excludes `build.rs` and `builder/`.
    pub fn should_skip(&self, entry: &Path, root: &Path) -> bool {
        let Some(relative) = path::relative_to(entry, root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }
        let relative = path::relative_string(relative);

        if self
            .excluded_paths
            .iter()
            .any(|prefix| relative.starts_with(prefix.as_str()))
        {
            return true;
        }

        self.skipped_files.contains(&path::base_name(entry))
    }
}
