//! Error types for module map generation.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source directory does not exist or is not a directory.
    #[error("{} is not a directory", path.display())]
    InvalidDirectory {
        /// The path exactly as supplied on the command line.
        path: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        /// What was being attempted ("write", "read", ...).
        action: &'static str,
        /// The path the operation targeted.
        path: PathBuf,
        /// The underlying port error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The VFS overlay could not be serialized.
    #[error("failed to serialize VFS overlay: {0}")]
    Serialize(#[from] serde_yaml::Error),
    /// Command-line parsing failed, or help/version output was requested.
    #[error("{message}")]
    Usage {
        /// Rendered clap message.
        message: String,
        /// Exit status clap would use.
        code: u8,
    },
    /// A cassette could not be loaded or written.
    #[error("cassette error: {0}")]
    Cassette(String),
}

impl Error {
    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { code, .. } => *code,
            _ => 1,
        }
    }

    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
