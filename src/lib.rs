//! csv-gate: client-side validation of tabular uploads.
//!
//! Files are checked against a fixed schema before they are sent anywhere.
//! Validation runs on an isolated worker task, reports progress chunk by
//! chunk, and can be cancelled or restarted at any moment without a stale
//! result ever reaching the caller.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: schema rules, rows, errors and results with no runtime
//!   dependencies
//! - **Ports**: trait seams for row validation and job submission
//! - **Adapters**: concrete implementations of ports
//!
//! # Modules
//!
//! - [`validation`]: schema registry, tokenizer and row validator
//! - [`session`]: worker protocol, chunk scheduler, session controller and
//!   error-line export
//! - [`upload`]: forwarding validated files to the submission service

pub mod session;
pub mod upload;
pub mod validation;
