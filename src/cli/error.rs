//! CLI error types

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::error::AsciiError;
use crate::source::LoadError;

/// Errors surfaced by the command-line binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Convert(#[from] AsciiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to set up image source: {0}")]
    Source(#[from] LoadError),

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("No image given")]
    MissingImage,

    #[error("Failed to start async runtime: {0}")]
    Runtime(std::io::Error),
}
