//! Error types for migramap operations.
//!
//! Only failures that prevent the report from being produced surface as
//! [`Error`]. A file that cannot be read mid-scan is recorded as a
//! [`ScanFailure`](crate::core::ScanFailure) instead and the scan continues.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for migramap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A source file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report artifact could not be written
    #[error("Failed to write report to {}: {source}", .path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Directory traversal errors
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// Ignore pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn file_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn artifact_write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::ArtifactWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileRead { path, .. } | Self::ArtifactWrite { path, .. } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
