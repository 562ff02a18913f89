//! Submission port for the external comparison service.

use crate::upload::domain::{FileUpload, JobId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for job submission.
pub type SubmitterResult<T> = Result<T, SubmitterError>;

/// Job-submission contract.
#[async_trait]
pub trait JobSubmitter: Send + Sync {
    /// Submits a file and returns the job created for it.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitterError::Rejected`] when the service refuses the
    /// file or [`SubmitterError::Unavailable`] when it cannot be reached.
    async fn submit(&self, upload: &FileUpload) -> SubmitterResult<JobId>;
}

/// Errors returned by job submitter implementations.
#[derive(Debug, Clone, Error)]
pub enum SubmitterError {
    /// The service refused the file.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// Transport or service failure.
    #[error("submission service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubmitterError {
    /// Wraps a transport error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
