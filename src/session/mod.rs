//! Validation sessions: worker protocol, chunk scheduler and controller.
//!
//! A session is one validate-request-to-result lifecycle for a single file.
//! Validation runs on an isolated worker task that talks to the controller
//! only through ordered, typed messages; the caller stays free to re-select
//! or cancel at any time.
//!
//! - [`protocol`]: request and response messages
//! - [`scheduler`]: the chunked scanning loop and worker handle
//! - [`state`]: session identity and observable state
//! - [`controller`]: lifecycle management and stale-message filtering
//! - [`export`]: the "bad rows only" artifact
//! - [`error`]: faults and controller errors

pub mod controller;
pub mod error;
pub mod export;
pub mod protocol;
pub mod scheduler;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::{ProductValidationSession, ValidationSession};
pub use error::{ExportError, ScanError, SessionError};
pub use export::{ErrorExport, ExportOptions};
pub use protocol::{ValidateRequest, WorkerMessage, WorkerRequest};
pub use scheduler::{ChunkScheduler, ScanOutcome, WORKER_QUEUE_CAPACITY, WorkerHandle};
pub use state::{SessionId, SessionSnapshot, SessionStatus, SourceFile};
