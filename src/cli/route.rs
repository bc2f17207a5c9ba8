//! CLI route: run context and command dispatch.

use crate::cli::parse::{Commands, ScanArgs};
use crate::cli::presentation::format_scan_summary;
use crate::config::{ConfigLoader, SnapshotConfig};
use crate::error::AppError;
use crate::output::{self, SnapshotStats};
use crate::scan::Scanner;
use std::path::PathBuf;
use tracing::{debug, info};

/// Runtime context for CLI execution: the merged configuration.
pub struct RunContext {
    config: SnapshotConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, AppError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: SnapshotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Execute a command and return the text to print on stdout
    pub fn execute(&self, command: &Commands) -> Result<String, AppError> {
        match command {
            Commands::Scan(args) => self.handle_scan(args),
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| AppError::Config(format!("Failed to render config: {}", e))),
        }
    }

    fn handle_scan(&self, args: &ScanArgs) -> Result<String, AppError> {
        let config = apply_scan_args(self.config.clone(), args);
        validate(&config)?;

        let root = match &args.root {
            Some(root) => root.clone(),
            None => prompt_for_root()?,
        };
        debug!(root = %root.display(), "Resolved scan root");

        let tree = Scanner::new(config.scan.clone()).scan(&root)?;
        let pretty = config.output.pretty && !args.compact;

        if args.stdout {
            return output::to_json(&tree, pretty);
        }

        output::write_snapshot(&tree, &config.output.file, pretty)?;
        let stats = SnapshotStats::collect(&tree, &config.scan.skipped_content);
        info!(
            directories = stats.directories,
            files = stats.files,
            skipped = stats.skipped,
            "Snapshot complete"
        );
        Ok(format_scan_summary(&tree.name, &stats, &config.output.file))
    }
}

/// Fold CLI scan flags over the loaded configuration; list flags extend.
pub fn apply_scan_args(mut config: SnapshotConfig, args: &ScanArgs) -> SnapshotConfig {
    let scan = &mut config.scan;
    scan.excluded_paths.extend(args.exclude_paths.iter().cloned());
    scan.included_extensions.extend(args.include_extensions.iter().cloned());
    scan.excluded_extensions.extend(args.exclude_extensions.iter().cloned());
    scan.skipped_files.extend(args.skip_files.iter().cloned());
    if let Some(ref sentinel) = args.skipped_content {
        scan.skipped_content = sentinel.clone();
    }
    if let Some(ref file) = args.output {
        config.output.file = file.clone();
    }
    config
}

fn validate(config: &SnapshotConfig) -> Result<(), AppError> {
    config.validate().map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        AppError::Config(format!(
            "Configuration validation failed:\n{}",
            error_msgs.join("\n")
        ))
    })
}

/// Ask the user which folder to scan
fn prompt_for_root() -> Result<PathBuf, AppError> {
    let answer: String = dialoguer::Input::new()
        .with_prompt("Folder to scan")
        .default(".".to_string())
        .interact_text()
        .map_err(|e| AppError::Prompt(e.to_string()))?;
    Ok(PathBuf::from(answer.trim()))
}
