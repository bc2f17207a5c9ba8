//! Global config file source: $XDG_CONFIG_HOME/treesnap/config.toml or
//! ~/.config/treesnap/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
///
/// Honors XDG_CONFIG_HOME, then HOME, then the platform config dir.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .or_else(|| directories::BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))?;
    Some(config_home.join("treesnap").join("config.toml"))
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            let canonical = dunce::canonicalize(&global_path).unwrap_or(global_path);
            builder = builder.add_source(File::from(canonical).required(false));
        } else {
            debug!(
                config_path = %global_path.display(),
                "No global configuration file; using defaults"
            );
        }
    }
    Ok(builder)
}
