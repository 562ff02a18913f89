//! Forwards files to the submission service once they validate cleanly.

use crate::session::{SessionStatus, ValidationSession};
use crate::upload::{
    domain::{FileUpload, SubmissionReceipt},
    ports::{JobSubmitter, SubmitterError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by the upload gate.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No completed validation result exists for the current file.
    #[error("file has not been validated")]
    NotValidated,

    /// The last validation found errors.
    #[error("validation failed on {invalid_lines} line(s)")]
    ValidationFailed {
        /// Number of rows with at least one error.
        invalid_lines: usize,
    },

    /// The submission service failed.
    #[error(transparent)]
    Submission(#[from] SubmitterError),
}

/// Result type for upload gate operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Gate between validation sessions and the submission service.
#[derive(Debug, Clone)]
pub struct UploadGate<S> {
    submitter: Arc<S>,
}

impl<S> UploadGate<S>
where
    S: JobSubmitter,
{
    /// Creates a gate around a submitter.
    #[must_use]
    pub const fn new(submitter: Arc<S>) -> Self {
        Self { submitter }
    }

    /// Submits the session's file when its last result is valid.
    ///
    /// # Errors
    ///
    /// Returns the refusals of [`prepare_upload`], or
    /// [`UploadError::Submission`] when the service fails.
    pub async fn forward<V, C>(
        &self,
        session: &ValidationSession<V, C>,
    ) -> UploadResult<SubmissionReceipt> {
        let upload = prepare_upload(session)?;
        let job_id = self.submitter.submit(&upload).await?;
        tracing::info!(
            job = %job_id,
            file = upload.file_name(),
            bytes = upload.len(),
            "validated file submitted"
        );
        Ok(SubmissionReceipt::new(job_id, upload.len()))
    }
}

/// Builds the submission payload for a session without submitting it.
///
/// The payload carries the file's bytes as they were read.
///
/// # Errors
///
/// Returns [`UploadError::NotValidated`] unless the session completed, and
/// [`UploadError::ValidationFailed`] when its result has errors.
pub fn prepare_upload<V, C>(session: &ValidationSession<V, C>) -> UploadResult<FileUpload> {
    match session.snapshot().status() {
        SessionStatus::Completed(result) if result.is_valid() => {}
        SessionStatus::Completed(result) => {
            return Err(UploadError::ValidationFailed {
                invalid_lines: result.invalid_lines(),
            });
        }
        SessionStatus::Idle | SessionStatus::Validating { .. } | SessionStatus::Errored { .. } => {
            return Err(UploadError::NotValidated);
        }
    }

    let source = session.source().ok_or(UploadError::NotValidated)?;
    Ok(FileUpload::new(source.name(), source.raw()))
}
