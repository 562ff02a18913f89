//! Chunked scanning loop run inside an isolated worker task.
//!
//! The scheduler validates data rows in consecutive chunks, reporting progress
//! after each chunk and yielding to the runtime between chunks. Output is
//! strictly sequential: the chunk size changes how many progress messages are
//! sent, never the final [`ValidationResult`](crate::validation::domain::ValidationResult).
//!
//! Workers talk to their owner only through an ordered, bounded channel; a
//! worker that gets ahead of its owner waits for room instead of queueing
//! without limit. Dropping the receiving end (or the [`WorkerHandle`])
//! cancels the worker; no cooperative shutdown signal exists.

use crate::session::{
    error::ScanError,
    protocol::{ValidateRequest, WorkerMessage, WorkerRequest},
};
use crate::validation::{
    domain::{ChunkProgress, ValidationTally},
    ports::validator::RowValidator,
    tokenizer,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

/// Messages a worker may queue before it waits for its owner.
pub const WORKER_QUEUE_CAPACITY: usize = 64;

/// Sending half of a worker's message channel.
pub type Outbox = mpsc::Sender<WorkerMessage>;

/// How a scan ended when no fault occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The terminal result was delivered.
    Completed,
    /// The receiver was dropped before the scan finished.
    Cancelled,
}

/// Drives a [`RowValidator`] over every data row of a request.
#[derive(Debug)]
pub struct ChunkScheduler<V, C> {
    validator: Arc<V>,
    clock: Arc<C>,
}

impl<V, C> ChunkScheduler<V, C>
where
    V: RowValidator,
    C: Clock + Send + Sync,
{
    /// Creates a scheduler.
    #[must_use]
    pub const fn new(validator: Arc<V>, clock: Arc<C>) -> Self {
        Self { validator, clock }
    }

    /// Validates the request content, sending progress and the result to
    /// `outbox`.
    ///
    /// Returns [`ScanOutcome::Cancelled`] as soon as a send fails, since a
    /// closed channel means the owner discarded the session.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidChunkSize`] when `chunk_size` is zero.
    pub async fn run(
        &self,
        request: &ValidateRequest,
        outbox: &Outbox,
    ) -> Result<ScanOutcome, ScanError> {
        let started = self.clock.utc();
        if request.chunk_size == 0 {
            return Err(ScanError::InvalidChunkSize);
        }

        let lines = tokenizer::split_lines(&request.content);
        let total = lines.data().len();
        tracing::debug!(
            rows = total,
            columns = self.validator.expected_columns(),
            chunk_size = request.chunk_size,
            "scan started"
        );
        let mut tally = ValidationTally::new();

        for chunk in lines.data().chunks(request.chunk_size) {
            for line in chunk {
                let row = tokenizer::tokenize_line(*line, request.quote_mode);
                tally.record_row(self.validator.validate_row(&row));
            }

            let progress = ChunkProgress::new(tally.processed(), total);
            if outbox.send(WorkerMessage::Progress(progress)).await.is_err() {
                return Ok(ScanOutcome::Cancelled);
            }
            tokio::task::yield_now().await;
        }

        let result = tally.finish(elapsed_ms(started, self.clock.utc()));
        tracing::debug!(
            total_lines = result.total_lines(),
            invalid_lines = result.invalid_lines(),
            errors = result.errors().len(),
            "scan finished"
        );
        if outbox.send(WorkerMessage::Completed(result)).await.is_err() {
            return Ok(ScanOutcome::Cancelled);
        }
        Ok(ScanOutcome::Completed)
    }
}

impl<V, C> ChunkScheduler<V, C>
where
    V: RowValidator + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Spawns a worker task for one request.
    ///
    /// The worker owns its copy of the content. Faults are reported as a
    /// single error message; panics are surfaced the same way by
    /// [`WorkerHandle::recv`].
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn spawn(self: &Arc<Self>, request: WorkerRequest) -> WorkerHandle {
        let (outbox, messages) = mpsc::channel(WORKER_QUEUE_CAPACITY);
        let scheduler = Arc::clone(self);
        let task = tokio::spawn(async move {
            let WorkerRequest::Validate(payload) = request;
            scheduler.work(&payload, &outbox).await;
        });
        WorkerHandle::new(messages, task)
    }

    async fn work(&self, request: &ValidateRequest, outbox: &Outbox) {
        match self.run(request, outbox).await {
            Ok(ScanOutcome::Completed) => {}
            Ok(ScanOutcome::Cancelled) => {
                tracing::debug!("validation worker cancelled by its owner");
            }
            Err(err) => {
                tracing::warn!(error = %err, "validation worker fault");
                if outbox
                    .send(WorkerMessage::error(err.to_string()))
                    .await
                    .is_err()
                {
                    tracing::debug!("fault raised after the owner went away");
                }
            }
        }
    }
}

/// Owner's side of a running worker.
///
/// Dropping the handle terminates the worker immediately.
#[derive(Debug)]
pub struct WorkerHandle {
    messages: mpsc::Receiver<WorkerMessage>,
    task: Option<JoinHandle<()>>,
    abort: AbortHandle,
}

impl WorkerHandle {
    fn new(messages: mpsc::Receiver<WorkerMessage>, task: JoinHandle<()>) -> Self {
        let abort = task.abort_handle();
        Self {
            messages,
            task: Some(task),
            abort,
        }
    }

    /// Returns a handle that terminates the worker without consuming this
    /// handle.
    #[must_use]
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    /// Waits for the next message.
    ///
    /// When the worker panicked, a synthesised error message is returned once
    /// its channel closes. Returns `None` after the worker is gone.
    pub async fn recv(&mut self) -> Option<WorkerMessage> {
        if let Some(message) = self.messages.recv().await {
            return Some(message);
        }

        let task = self.task.take()?;
        match task.await {
            Err(err) if err.is_panic() => {
                let payload = err.into_panic();
                let fault = ScanError::from_panic(&*payload);
                tracing::warn!(error = %fault, "validation worker panicked");
                Some(WorkerMessage::error(fault.to_string()))
            }
            _ => None,
        }
    }

    /// Terminates the worker; in-flight work is discarded.
    pub fn terminate(&self) {
        self.abort.abort();
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "elapsed microseconds fit comfortably in an f64 mantissa"
)]
fn elapsed_ms(started: DateTime<Utc>, finished: DateTime<Utc>) -> f64 {
    let micros = (finished - started)
        .num_microseconds()
        .unwrap_or(i64::MAX)
        .max(0);
    micros as f64 / 1000.0
}
