//! Content policy: decides what text a file node carries.

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::tree::minify::minify;
use std::collections::HashSet;
use std::path::Path;
use tracing::trace;

/// Capability to read a file's full text.
pub trait ContentSource {
    fn read_text(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads straight from the host filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsContentSource;

impl ContentSource for FsContentSource {
    fn read_text(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// What to do with a file of a given extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDecision {
    /// Substitute the sentinel without reading
    Skip,
    /// Read the full text as-is
    Read,
    /// Read and pass through the minifier
    Minify,
}

/// Extension of a file name: text after the last `.`, lower-cased, with a
/// leading `.`. Names without a `.` yield `"."`.
pub fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(idx) => format!(".{}", name[idx + 1..].to_lowercase()),
        None => ".".to_string(),
    }
}

/// Normalize a configured extension to the `extension_of` form.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() {
        None
    } else if ext.starts_with('.') {
        Some(ext)
    } else {
        Some(format!(".{}", ext))
    }
}

fn extension_set(exts: &[String]) -> HashSet<String> {
    exts.iter().filter_map(|e| normalize_extension(e)).collect()
}

/// Allow-list, deny-list and minify rules keyed by extension.
#[derive(Debug, Clone)]
pub struct ContentPolicy {
    included: HashSet<String>,
    excluded: HashSet<String>,
    minified: HashSet<String>,
    sentinel: String,
}

impl ContentPolicy {
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            included: extension_set(&config.included_extensions),
            excluded: extension_set(&config.excluded_extensions),
            minified: extension_set(&config.minify_extensions),
            sentinel: config.skipped_content.clone(),
        }
    }

    /// The skipped-content sentinel
    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub fn decide(&self, extension: &str) -> ContentDecision {
        let not_allowed = !self.included.is_empty() && !self.included.contains(extension);
        if not_allowed || self.excluded.contains(extension) {
            ContentDecision::Skip
        } else if self.minified.contains(extension) {
            ContentDecision::Minify
        } else {
            ContentDecision::Read
        }
    }

    /// Content for a file that passed the path filter.
    ///
    /// Skipped files are never read. Read failures abort with `ScanError::Read`.
    pub fn content_for<S>(&self, path: &Path, source: &S) -> Result<String, ScanError>
    where
        S: ContentSource + ?Sized,
    {
        let extension = extension_of(path);
        let decision = self.decide(&extension);
        trace!(
            path = %path.display(),
            extension = %extension,
            ?decision,
            "Resolved content policy"
        );

        if decision == ContentDecision::Skip {
            return Ok(self.sentinel.clone());
        }

        let text = source.read_text(path).map_err(|e| ScanError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(match decision {
            ContentDecision::Minify => minify(&text),
            _ => text,
        })
    }
}
