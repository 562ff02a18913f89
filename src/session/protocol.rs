//! Messages exchanged between the session controller and a worker.
//!
//! Each session sends one [`WorkerRequest`] and receives zero or more
//! progress messages followed by exactly one terminal message (a result or an
//! error). Messages serialise with a `kind` tag and camel-case fields:
//!
//! ```json
//! {"kind":"validate","content":"...","chunkSize":1000,"quoteMode":"rfc4180"}
//! {"kind":"progress","progressFraction":0.5,"processedLines":1000}
//! {"kind":"result","isValid":true,"totalLines":2000,...}
//! {"kind":"error","message":"..."}
//! ```

use crate::validation::{
    domain::{ChunkProgress, ValidationResult},
    ports::validator::{DEFAULT_CHUNK_SIZE, ScanConfig},
    tokenizer::QuoteMode,
};
use serde::{Deserialize, Serialize};

/// Payload of a validation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    /// Full file text, owned by the worker.
    pub content: String,
    /// Data rows per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Quote handling used by the tokenizer.
    #[serde(default)]
    pub quote_mode: QuoteMode,
}

const fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl ValidateRequest {
    /// Creates a request with the default scan configuration.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_config(content, &ScanConfig::default())
    }

    /// Creates a request with an explicit scan configuration.
    #[must_use]
    pub fn with_config(content: impl Into<String>, config: &ScanConfig) -> Self {
        Self {
            content: content.into(),
            chunk_size: config.chunk_size,
            quote_mode: config.quote_mode,
        }
    }
}

/// Message sent from the controller to a worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkerRequest {
    /// Validate the supplied content.
    Validate(ValidateRequest),
}

/// Message sent from a worker to the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkerMessage {
    /// A chunk finished.
    Progress(ChunkProgress),
    /// Every row was processed; always the last message of a session.
    #[serde(rename = "result")]
    Completed(ValidationResult),
    /// The scan aborted on a fault; always the last message of a session.
    Error {
        /// Description of the fault.
        message: String,
    },
}

impl WorkerMessage {
    /// Creates an error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Returns `true` for the result and error messages.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Error { .. })
    }
}
