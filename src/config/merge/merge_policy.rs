//! Merge rules: defaults, override order, conflict handling.

use crate::config::scan::{default_minify_extensions, DEFAULT_SKIPPED_CONTENT};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scan.excluded_paths", Vec::<String>::new())?
        .set_default("scan.included_extensions", Vec::<String>::new())?
        .set_default("scan.excluded_extensions", Vec::<String>::new())?
        .set_default("scan.skipped_files", Vec::<String>::new())?
        .set_default("scan.skipped_content", DEFAULT_SKIPPED_CONTENT)?
        .set_default("scan.minify_extensions", default_minify_extensions())?
        .set_default("output.file", "folder_structure.json")?
        .set_default("output.pretty", true)
}
