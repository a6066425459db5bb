//! Error types for export-model

use std::path::PathBuf;

/// Result type for export-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or running an export
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the filesystem layer
    #[error(transparent)]
    Fs(#[from] export_fs::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A platform client could not produce a working copy
    #[error("Failed to create working copy for project {project}: {message}")]
    WorkingCopy { project: String, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
