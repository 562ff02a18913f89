//! Observable state of a validation session.

use crate::session::protocol::WorkerMessage;
use crate::validation::domain::{ChunkProgress, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Identity of one validate-request-to-result lifecycle.
///
/// Every new file gets a fresh identifier, which is how late messages from a
/// superseded worker are recognised and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state: `Idle -> Validating -> Completed | Errored`.
///
/// Resetting or selecting a new file returns any state to `Idle` (or
/// straight to a fresh `Validating`).
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    /// No file is being validated.
    Idle,
    /// A worker is scanning the file.
    Validating {
        /// Latest progress reported by the worker.
        progress: ChunkProgress,
    },
    /// Every row was validated; the result may still contain row errors.
    Completed(Arc<ValidationResult>),
    /// The worker aborted on a fault.
    Errored {
        /// Description of the fault.
        message: String,
    },
}

impl SessionStatus {
    /// Returns the canonical state name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating { .. } => "validating",
            Self::Completed(_) => "completed",
            Self::Errored { .. } => "errored",
        }
    }

    /// Returns `true` while a worker is running.
    #[must_use]
    pub const fn is_validating(&self) -> bool {
        matches!(self, Self::Validating { .. })
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of a session, as published to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    session_id: Option<SessionId>,
    status: SessionStatus,
}

impl SessionSnapshot {
    /// The state before any file is selected.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            session_id: None,
            status: SessionStatus::Idle,
        }
    }

    pub(crate) const fn validating(session_id: SessionId) -> Self {
        Self {
            session_id: Some(session_id),
            status: SessionStatus::Validating {
                progress: ChunkProgress::start(),
            },
        }
    }

    /// Returns the current session identifier, absent when idle.
    #[must_use]
    pub const fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Returns the latest progress while validating.
    #[must_use]
    pub const fn progress(&self) -> Option<ChunkProgress> {
        match &self.status {
            SessionStatus::Validating { progress } => Some(*progress),
            _ => None,
        }
    }

    /// Returns the result of a completed session.
    #[must_use]
    pub const fn result(&self) -> Option<&Arc<ValidationResult>> {
        match &self.status {
            SessionStatus::Completed(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the fault message of an errored session.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SessionStatus::Errored { message } => Some(message),
            _ => None,
        }
    }

    /// Applies a worker message if it belongs to the current session.
    ///
    /// Returns `false`, leaving the snapshot untouched, when the message comes
    /// from another session or the session is no longer validating.
    pub(crate) fn apply(&mut self, session_id: SessionId, message: WorkerMessage) -> bool {
        if self.session_id != Some(session_id) || !self.status.is_validating() {
            return false;
        }

        self.status = match message {
            WorkerMessage::Progress(progress) => SessionStatus::Validating { progress },
            WorkerMessage::Completed(result) => SessionStatus::Completed(Arc::new(result)),
            WorkerMessage::Error { message } => SessionStatus::Errored { message },
        };
        true
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}

/// The file under validation, owned by the session for its lifetime.
///
/// Keeps the bytes exactly as they were read next to the decoded text that is
/// validated and exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: String,
    content: String,
    raw: Vec<u8>,
}

impl SourceFile {
    /// Creates a source file from in-memory text; the raw bytes are the
    /// text's UTF-8 encoding.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let text = content.into();
        Self {
            name: name.into(),
            raw: text.clone().into_bytes(),
            content: text,
        }
    }

    /// Creates a source file whose decoded text differs from its bytes, for
    /// example after a byte order mark was dropped.
    #[must_use]
    pub fn with_raw(name: impl Into<String>, content: impl Into<String>, raw: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            raw,
        }
    }

    /// Returns the file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the decoded text that is validated.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the bytes as they were read, unmodified.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}
