//! Scan orchestration: walk a folder and build its snapshot tree.

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::tree::builder::TreeBuilder;
use crate::tree::filter::PathFilter;
use crate::tree::node::FileNode;
use crate::tree::path;
use crate::tree::walker::Walker;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info, instrument};

/// Drives a walk and feeds every entry to a [`TreeBuilder`].
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `root` and return the finished tree.
    ///
    /// Fails if the root is missing or not a directory, if enumeration fails,
    /// or if any file that passes the content policy cannot be read as text.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> Result<FileNode, ScanError> {
        let start = Instant::now();
        info!("Starting scan");

        let root = path::canonicalize_root(root).inspect_err(|e| {
            error!("Invalid scan root: {}", e);
        })?;

        let filter = PathFilter::from_config(&self.config);
        let walker = Walker::new(root.clone()).with_filter(filter);
        let mut builder = TreeBuilder::new(root, &self.config);

        let inserted = builder.extend(walker.entries()).inspect_err(|e| {
            error!("Scan aborted: {}", e);
        })?;
        let tree = builder.finish();

        info!(
            entries = inserted,
            node_count = tree.node_count(),
            duration_ms = start.elapsed().as_millis(),
            "Scan completed"
        );
        Ok(tree)
    }
}

/// Scan `root` with the given configuration
pub fn scan(root: &Path, config: &ScanConfig) -> Result<FileNode, ScanError> {
    Scanner::new(config.clone()).scan(root)
}
