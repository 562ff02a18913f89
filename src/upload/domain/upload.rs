//! Payloads exchanged with the job-submission service.

use super::JobId;
use serde::{Deserialize, Serialize};

/// A file handed to the job-submission service, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload payload.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Returns the original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for an empty file.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Acknowledgement returned after a file was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    job_id: JobId,
    bytes: usize,
}

impl SubmissionReceipt {
    /// Creates a receipt.
    #[must_use]
    pub const fn new(job_id: JobId, bytes: usize) -> Self {
        Self { job_id, bytes }
    }

    /// Returns the job created for the file.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the number of bytes submitted.
    #[must_use]
    pub const fn bytes(&self) -> usize {
        self.bytes
    }
}
