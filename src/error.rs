//! Error types for comment file access

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading or writing a comment file
#[derive(Debug, Error)]
pub enum CommentFileError {
    /// The source file is missing or unreadable
    #[error("cannot read comment file {}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The destination could not be created, truncated or written
    #[error("cannot write comment file {}", path.display())]
    Write {
        /// Path that was being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl CommentFileError {
    /// The path involved in the failure
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path.as_path(),
        }
    }
}
