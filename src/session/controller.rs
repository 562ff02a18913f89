//! Validation session controller.
//!
//! The controller owns at most one worker at a time. Starting a new file or
//! resetting terminates the current worker immediately and replaces the
//! published state, so a superseded worker can never change what observers
//! see: every worker message is tagged with its [`SessionId`] and applied only
//! while that id is current.

use crate::session::{
    error::{ExportError, ScanError, SessionError},
    export::{ErrorExport, ExportOptions, export_error_lines},
    protocol::{ValidateRequest, WorkerMessage, WorkerRequest},
    scheduler::{ChunkScheduler, WorkerHandle},
    state::{SessionId, SessionSnapshot, SessionStatus, SourceFile},
};
use crate::validation::{
    domain::ValidationResult,
    ports::validator::{RowValidator, ScanConfig},
    service::SchemaRowValidator,
};
use mockable::{Clock, DefaultClock};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Session controller for the product schema with the system clock.
pub type ProductValidationSession = ValidationSession<SchemaRowValidator, DefaultClock>;

struct ActiveWorker {
    worker: AbortHandle,
    relay: JoinHandle<()>,
}

impl ActiveWorker {
    fn terminate(self) {
        self.worker.abort();
        self.relay.abort();
    }
}

/// Runs validation concurrently with the caller and exposes its state.
///
/// Validation never blocks the caller: the scan runs on a spawned worker and
/// its messages are relayed into a [`watch`] channel that observers await.
///
/// # Example
///
/// ```
/// use csv_gate::session::ProductValidationSession;
/// use csv_gate::validation::ports::validator::ScanConfig;
///
/// # async fn demo() {
/// let mut session = ProductValidationSession::for_products(ScanConfig::default());
/// session.validate_content(
///     "produtos.csv",
///     "id,nome,categoria,preco,estoque,fornecedor\n1,Mouse,Hardware,10.00,5,ACME".to_owned(),
/// );
///
/// let snapshot = session.settled().await;
/// let result = snapshot.result().expect("session should complete");
/// assert!(result.is_valid());
/// assert_eq!(result.total_lines(), 1);
/// # }
/// # tokio::runtime::Runtime::new().unwrap().block_on(demo());
/// ```
pub struct ValidationSession<V, C> {
    scheduler: Arc<ChunkScheduler<V, C>>,
    config: ScanConfig,
    export: ExportOptions,
    state: Arc<watch::Sender<SessionSnapshot>>,
    source: Option<SourceFile>,
    active: Option<ActiveWorker>,
}

impl ProductValidationSession {
    /// Creates a controller validating against the product schema.
    #[must_use]
    pub fn for_products(config: ScanConfig) -> Self {
        let scheduler = ChunkScheduler::new(
            Arc::new(SchemaRowValidator::new()),
            Arc::new(DefaultClock),
        );
        Self::new(Arc::new(scheduler), config)
    }
}

impl<V, C> ValidationSession<V, C> {
    /// Returns the scan configuration used for new sessions.
    #[must_use]
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Returns the last completed result, if any.
    #[must_use]
    pub fn result(&self) -> Option<Arc<ValidationResult>> {
        self.state.borrow().result().cloned()
    }

    /// Returns the file under validation, kept until reset or replaced.
    #[must_use]
    pub const fn source(&self) -> Option<&SourceFile> {
        self.source.as_ref()
    }

    /// Waits until the current session is no longer validating.
    pub async fn settled(&self) -> SessionSnapshot {
        let mut updates = self.state.subscribe();
        let settled = updates
            .wait_for(|snapshot| !snapshot.status().is_validating())
            .await
            .map(|snapshot| (*snapshot).clone());
        settled.unwrap_or_else(|_| self.snapshot())
    }

    /// Builds the "bad rows only" artifact.
    ///
    /// Returns `None` when there is no completed result or no cached content.
    #[must_use]
    pub fn download_error_csv(&self) -> Option<ErrorExport> {
        self.try_export().ok()
    }

    /// Builds the "bad rows only" artifact, reporting why it is unavailable.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NoResult`] before a session completes and
    /// [`ExportError::NoContent`] when the content was discarded.
    pub fn try_export(&self) -> Result<ErrorExport, ExportError> {
        let result = self.result().ok_or(ExportError::NoResult)?;
        let source = self.source.as_ref().ok_or(ExportError::NoContent)?;
        Ok(export_error_lines(
            source.content(),
            result.errors(),
            &self.export,
        ))
    }

    /// Terminates the current worker, if any, and returns to `Idle`.
    ///
    /// Cached content and the last result are discarded.
    pub fn reset_validation(&mut self) {
        self.terminate_active();
        self.source = None;
        self.state.send_replace(SessionSnapshot::idle());
    }

    fn terminate_active(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!("terminating validation worker");
            active.terminate();
        }
    }
}

impl<V, C> ValidationSession<V, C>
where
    V: RowValidator + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a controller around a scheduler.
    #[must_use]
    pub fn new(scheduler: Arc<ChunkScheduler<V, C>>, config: ScanConfig) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::idle());
        Self {
            scheduler,
            config,
            export: ExportOptions::default(),
            state: Arc::new(state),
            source: None,
            active: None,
        }
    }

    /// Sets the options used when exporting error lines.
    #[must_use]
    pub fn with_export_options(mut self, export: ExportOptions) -> Self {
        self.export = export;
        self
    }

    /// Reads a file and starts validating it.
    ///
    /// Any running session is cancelled before the file is read. A leading
    /// byte order mark is dropped from the validated text; the bytes kept
    /// for upload are the file's bytes, unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the file cannot be read or is not UTF-8;
    /// the controller is left `Idle`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub async fn validate_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<SessionId, SessionError> {
        self.reset_validation();

        let file = path.as_ref();
        let raw = tokio::fs::read(file)
            .await
            .map_err(|source| SessionError::Read {
                path: file.to_path_buf(),
                source,
            })?;
        let text = std::str::from_utf8(&raw).map_err(|_| SessionError::InvalidEncoding {
            path: file.to_path_buf(),
        })?;
        let content = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text).to_owned();

        let name = file.file_name().map_or_else(
            || file.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Ok(self.start(SourceFile::with_raw(name, content, raw)))
    }

    /// Starts validating in-memory content.
    ///
    /// Any running session is terminated first; its late messages are
    /// ignored. The controller keeps its own copy of the content for export
    /// and upload, and the worker receives a separate copy.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn validate_content(&mut self, name: impl Into<String>, content: String) -> SessionId {
        self.start(SourceFile::new(name, content))
    }

    fn start(&mut self, source: SourceFile) -> SessionId {
        self.terminate_active();

        let session_id = SessionId::new();
        tracing::info!(
            session = %session_id,
            file = source.name(),
            bytes = source.raw().len(),
            chunk_size = self.config.chunk_size,
            "validation session started"
        );

        let request = WorkerRequest::Validate(ValidateRequest::with_config(
            source.content(),
            &self.config,
        ));
        self.state.send_replace(SessionSnapshot::validating(session_id));
        self.source = Some(source);

        let worker = self.scheduler.spawn(request);
        let abort = worker.abort_handle();
        let relay = tokio::spawn(relay(session_id, worker, Arc::clone(&self.state)));
        self.active = Some(ActiveWorker {
            worker: abort,
            relay,
        });
        session_id
    }
}

impl<V, C> Drop for ValidationSession<V, C> {
    fn drop(&mut self) {
        self.terminate_active();
    }
}

/// Forwards worker messages into the published state until the session ends.
async fn relay(
    session_id: SessionId,
    mut worker: WorkerHandle,
    state: Arc<watch::Sender<SessionSnapshot>>,
) {
    while let Some(message) = worker.recv().await {
        let terminal = message.is_terminal();
        if !state.send_if_modified(|snapshot| snapshot.apply(session_id, message)) {
            tracing::debug!(session = %session_id, "dropping message from superseded session");
            return;
        }
        if terminal {
            log_outcome(session_id, &state.borrow());
            return;
        }
    }

    let fault = WorkerMessage::error(ScanError::WorkerStopped.to_string());
    if state.send_if_modified(|snapshot| snapshot.apply(session_id, fault)) {
        tracing::warn!(session = %session_id, "validation worker stopped without a result");
    }
}

fn log_outcome(session_id: SessionId, snapshot: &SessionSnapshot) {
    match snapshot.status() {
        SessionStatus::Completed(result) => tracing::info!(
            session = %session_id,
            total_lines = result.total_lines(),
            valid_lines = result.valid_lines(),
            invalid_lines = result.invalid_lines(),
            elapsed_ms = result.validation_time_ms(),
            "validation session completed"
        ),
        SessionStatus::Errored { message } => tracing::warn!(
            session = %session_id,
            error = %message,
            "validation session failed"
        ),
        SessionStatus::Idle | SessionStatus::Validating { .. } => {}
    }
}
