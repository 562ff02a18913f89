//! In-memory job submitter for local runs and tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::upload::{
    domain::{FileUpload, JobId},
    ports::{JobSubmitter, SubmitterError, SubmitterResult},
};

/// Thread-safe submitter that records every accepted file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobSubmitter {
    state: Arc<RwLock<InMemorySubmissions>>,
}

#[derive(Debug, Default)]
struct InMemorySubmissions {
    jobs: Vec<(JobId, FileUpload)>,
    max_bytes: Option<usize>,
}

impl InMemoryJobSubmitter {
    /// Creates an empty submitter that accepts any file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a submitter that rejects files larger than `max_bytes`.
    #[must_use]
    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemorySubmissions {
                jobs: Vec::new(),
                max_bytes: Some(max_bytes),
            })),
        }
    }

    /// Returns the accepted submissions in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitterError::Unavailable`] when the store lock is
    /// poisoned.
    pub fn submissions(&self) -> SubmitterResult<Vec<(JobId, FileUpload)>> {
        let state = self
            .state
            .read()
            .map_err(|err| SubmitterError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.jobs.clone())
    }

    /// Finds the file submitted for a job.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitterError::Unavailable`] when the store lock is
    /// poisoned.
    pub fn find(&self, job_id: JobId) -> SubmitterResult<Option<FileUpload>> {
        let state = self
            .state
            .read()
            .map_err(|err| SubmitterError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state
            .jobs
            .iter()
            .find(|(id, _)| *id == job_id)
            .map(|(_, upload)| upload.clone()))
    }
}

#[async_trait]
impl JobSubmitter for InMemoryJobSubmitter {
    async fn submit(&self, upload: &FileUpload) -> SubmitterResult<JobId> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SubmitterError::unavailable(std::io::Error::other(err.to_string())))?;
        if let Some(limit) = state.max_bytes
            && upload.len() > limit
        {
            return Err(SubmitterError::Rejected(format!(
                "{} is {} bytes, limit is {limit}",
                upload.file_name(),
                upload.len()
            )));
        }

        let job_id = JobId::new();
        state.jobs.push((job_id, upload.clone()));
        Ok(job_id)
    }
}
