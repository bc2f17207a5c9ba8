//! Path helpers: root resolution, relative paths, and segment splitting

use crate::error::ScanError;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Resolve the scan root to an absolute, symlink-free path.
///
/// Uses dunce so Windows paths do not come back in `\\?\` form.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, ScanError> {
    let canonical = dunce::canonicalize(path).map_err(|e| ScanError::Walk {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !canonical.is_dir() {
        return Err(ScanError::Walk {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "scan root is not a directory",
            ),
        });
    }

    Ok(canonical)
}

/// Name used for the root node: the last segment of the root path.
///
/// Falls back to the full path for filesystem roots, which have no file name.
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.to_string_lossy().to_string())
}

/// Base name of an entry
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Path of `entry` relative to `root`, or None if it lies outside the root.
pub fn relative_to<'a>(entry: &'a Path, root: &Path) -> Option<&'a Path> {
    entry.strip_prefix(root).ok()
}

/// Relative path rendered with the platform separator.
pub fn relative_string(relative: &Path) -> String {
    segments(relative).join(&MAIN_SEPARATOR.to_string())
}

/// Split a relative path into its normal segments.
pub fn segments(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().to_string()),
            _ => None,
        })
        .collect()
}
