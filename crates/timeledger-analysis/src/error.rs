//! Error types for time-use analysis

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur during time-use analysis
///
/// Unlike extraction, analysis treats malformed input as a contract
/// violation by the caller: bad dates and missing columns surface
/// immediately instead of being skipped.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Failed to read a record file from disk
    #[error("Failed to read record file {path}: {source}")]
    ReadError {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A record file row does not match the expected column layout
    #[error("Invalid record file: {0}")]
    InvalidRecordFile(#[from] csv::Error),

    /// A calendar date string is not in month/day/year format
    #[error("Invalid date {value:?}: expected month/day/year")]
    InvalidDate {
        /// The offending date string
        value: String,
    },

    /// An event timestamp could not be parsed in any supported rendering
    #[error("Invalid timestamp {value:?}")]
    InvalidTimestamp {
        /// The offending timestamp string
        value: String,
    },
}

impl AnalysisError {
    /// Create a read error
    #[inline]
    #[must_use = "returns AnalysisError for file read failures"]
    pub fn read_error<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
