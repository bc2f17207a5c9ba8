//! Error types for the treesnap folder snapshot tool.

use std::path::PathBuf;
use thiserror::Error;

/// Scan-related errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to walk {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Cannot descend through file node at {0:?}")]
    PathConflict(PathBuf),
}

impl ScanError {
    /// Wrap a walkdir failure, keeping the path it happened on when known.
    pub fn from_walk(err: walkdir::Error, fallback: &std::path::Path) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| fallback.to_path_buf());
        ScanError::Walk {
            path,
            source: err.into(),
        }
    }
}

/// Application-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write snapshot to {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
