//! Error types for calendar-export extraction

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting records from a calendar export
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to read an export file from disk
    #[error("Failed to read export file {path}: {source}")]
    ReadError {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a record file to disk
    #[error("Failed to write record file {path}: {source}")]
    WriteError {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A delimited record file could not be parsed
    #[error("Invalid record file: {0}")]
    InvalidRecordFile(#[from] csv::Error),
}

impl ExtractError {
    /// Create a read error
    #[inline]
    #[must_use = "returns ExtractError for file read failures"]
    pub fn read_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error
    #[inline]
    #[must_use = "returns ExtractError for file write failures"]
    pub fn write_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
