//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{AppError, ScanError};

/// Map application errors to a string for CLI output.
pub fn map_error(e: &AppError) -> String {
    match e {
        AppError::Scan(ScanError::Read { .. }) => format!(
            "error: {}\nhint: exclude binary or unreadable files with --exclude-ext or --skip-file",
            e
        ),
        _ => format!("error: {}", e),
    }
}
