//! CLI parse: clap types for treesnap. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// treesnap CLI - snapshot a folder's structure and contents as JSON
#[derive(Parser)]
#[command(name = "treesnap")]
#[command(about = "Snapshot a folder's structure and contents into a single JSON tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory used to locate treesnap.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a folder and write its snapshot
    Scan(ScanArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ScanArgs {
    /// Folder to scan (prompted for when omitted)
    pub root: Option<PathBuf>,

    /// Snapshot file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the snapshot to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,

    /// Exclude a relative-path prefix (repeatable)
    #[arg(long = "exclude-path", value_name = "PREFIX")]
    pub exclude_paths: Vec<String>,

    /// Only keep content for this extension (repeatable)
    #[arg(long = "include-ext", value_name = "EXT")]
    pub include_extensions: Vec<String>,

    /// Replace content of this extension with the sentinel (repeatable)
    #[arg(long = "exclude-ext", value_name = "EXT")]
    pub exclude_extensions: Vec<String>,

    /// Exclude files and directories with this base name (repeatable)
    #[arg(long = "skip-file", value_name = "NAME")]
    pub skip_files: Vec<String>,

    /// Sentinel text for skipped content
    #[arg(long)]
    pub skipped_content: Option<String>,
}
