//! Workspace config file source: treesnap.toml and treesnap.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Base config file name looked up in the working directory
pub const WORKSPACE_CONFIG_FILE: &str = "treesnap.toml";

/// Add workspace config files to builder.
/// Precedence: treesnap.toml (base) then treesnap.{TREESNAP_ENV}.toml (env-specific).
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base_config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if base_config_path.exists() {
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    if let Ok(env_name) = std::env::var("TREESNAP_ENV") {
        let env_config_path = workspace_root.join(format!("treesnap.{}.toml", env_name));
        if env_config_path.exists() {
            builder = builder.add_source(File::from(env_config_path).required(false));
        }
    }

    Ok(builder)
}
