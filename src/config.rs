//! Configuration System
//!
//! Layered configuration for scans: built-in defaults, a user-level file, a
//! workspace file, and `TREESNAP_` environment variables, in that order of
//! precedence. The loaded value is passed explicitly to the scanner.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod scan;
mod sources;

pub use facade::ConfigLoader;
pub use scan::{ScanConfig, DEFAULT_SKIPPED_CONTENT};
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Content and exclusion policy
    #[serde(default)]
    pub scan: ScanConfig,

    /// Where and how the snapshot is written
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Snapshot output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file path
    #[serde(default = "default_output_file")]
    pub file: PathBuf,

    /// Pretty-print JSON
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_output_file() -> PathBuf {
    PathBuf::from("folder_structure.json")
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            pretty: default_true(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Scan(String),
    Output(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Scan(msg) => write!(f, "Scan: {}", msg),
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.file.as_os_str().is_empty() {
            return Err("Output file path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl SnapshotConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.scan.validate() {
            errors.push(ValidationError::Scan(e));
        }
        if let Err(e) = self.output.validate() {
            errors.push(ValidationError::Output(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
