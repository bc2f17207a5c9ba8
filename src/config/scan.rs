//! Scan policy configuration: exclusion rules, extension filters, sentinel.

use serde::{Deserialize, Serialize};

/// Sentinel used when a file's content is skipped by policy
pub const DEFAULT_SKIPPED_CONTENT: &str = "<!-- Skipped -->";

/// Rules applied while building a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Relative-path prefixes excluded from the tree, with everything below them
    #[serde(default)]
    pub excluded_paths: Vec<String>,

    /// Extensions whose content is kept (empty = all)
    #[serde(default)]
    pub included_extensions: Vec<String>,

    /// Extensions whose content is replaced by the sentinel
    #[serde(default)]
    pub excluded_extensions: Vec<String>,

    /// Base names excluded from the tree
    #[serde(default)]
    pub skipped_files: Vec<String>,

    /// Placeholder content for skipped files
    #[serde(default = "default_skipped_content")]
    pub skipped_content: String,

    /// Extensions whose content is run through the script minifier
    #[serde(default = "default_minify_extensions")]
    pub minify_extensions: Vec<String>,
}

fn default_skipped_content() -> String {
    DEFAULT_SKIPPED_CONTENT.to_string()
}

pub(crate) fn default_minify_extensions() -> Vec<String> {
    vec![".js".to_string(), ".ts".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_paths: Vec::new(),
            included_extensions: Vec::new(),
            excluded_extensions: Vec::new(),
            skipped_files: Vec::new(),
            skipped_content: default_skipped_content(),
            minify_extensions: default_minify_extensions(),
        }
    }
}

impl ScanConfig {
    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.skipped_content.is_empty() {
            return Err("Skipped content sentinel cannot be empty".to_string());
        }

        let lists = [
            ("included_extensions", &self.included_extensions),
            ("excluded_extensions", &self.excluded_extensions),
            ("minify_extensions", &self.minify_extensions),
        ];
        for (key, list) in lists {
            if list.iter().any(|ext| ext.trim().is_empty()) {
                return Err(format!("{} contains an empty extension", key));
            }
        }

        if self.skipped_files.iter().any(|name| name.is_empty()) {
            return Err("skipped_files contains an empty name".to_string());
        }

        Ok(())
    }
}
