//! CLI presentation: human-readable summaries.

use crate::output::SnapshotStats;
use owo_colors::OwoColorize;
use std::path::Path;

/// One-line summary of a written snapshot
pub fn format_scan_summary(root_name: &str, stats: &SnapshotStats, written_to: &Path) -> String {
    format!(
        "{} {} ({} directories, {} files, {} skipped) -> {}",
        "Snapshot".green().bold(),
        root_name.bold(),
        stats.directories,
        stats.files,
        stats.skipped.yellow(),
        written_to.display().cyan()
    )
}
