//! Error types for validation sessions.
//!
//! Row and field problems are not errors here; they are data carried by
//! [`crate::validation::domain::ValidationResult`]. These types describe
//! faults that abort a scan and failures of the controller itself.

use std::any::Any;
use std::path::PathBuf;
use thiserror::Error;

/// Faults raised inside a validation worker.
///
/// A fault aborts the scan and reaches the caller only as the message of a
/// `WorkerMessage::Error`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The request asked for chunks of zero rows.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,

    /// The worker panicked while validating rows.
    #[error("validation worker panicked: {0}")]
    WorkerPanicked(String),

    /// The worker exited without sending a terminal message.
    #[error("validation worker stopped without producing a result")]
    WorkerStopped,
}

impl ScanError {
    /// Builds a [`ScanError::WorkerPanicked`] from a panic payload.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_owned());
        Self::WorkerPanicked(message)
    }
}

/// Errors returned by the session controller.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not UTF-8 text.
    #[error("{} is not valid UTF-8 text", path.display())]
    InvalidEncoding {
        /// Path that was requested.
        path: PathBuf,
    },
}

/// Errors returned when building the error-line artifact.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ExportError {
    /// No session has completed.
    #[error("no completed validation result to export")]
    NoResult,

    /// The session no longer holds the original content.
    #[error("no cached file content to export from")]
    NoContent,
}
