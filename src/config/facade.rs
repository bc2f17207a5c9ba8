//! Config loader: builds a SnapshotConfig from layered sources.

use crate::config::merge::merge_policy;
use crate::config::sources::{env, global_file, workspace_file};
use crate::config::SnapshotConfig;
use crate::error::AppError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads configuration: defaults, global file, workspace file, environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for the given working directory
    pub fn load(workspace_root: &Path) -> Result<SnapshotConfig, AppError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = env::add_to_builder(builder);

        let config: SnapshotConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from one explicit file (plus defaults and environment)
    pub fn load_from_file(path: &Path) -> Result<SnapshotConfig, AppError> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = env::add_to_builder(builder);

        let config: SnapshotConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Path of the user-level config file, if one can be located
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Built-in defaults only
    pub fn default() -> SnapshotConfig {
        SnapshotConfig::default()
    }
}
