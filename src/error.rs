//! Error types for the course store and file ingestion

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by [`CourseStore`](crate::CourseStore)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this CRN is stored
    #[error("course with CRN {crn} not found")]
    NotFound { crn: i32 },

    /// The estimated capacity must be positive
    #[error("invalid estimated capacity: {0}")]
    InvalidCapacity(usize),
}

/// Errors raised while reading course files
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not follow `courseID crn credits room instructor...`
    #[error("malformed course line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A line is not valid UTF-8
    #[error("line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },

    /// A blocking parse task did not complete
    #[error("parse task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
