//! Unit tests for the session module.
//!
//! Covers the wire protocol, the chunked scheduler, the controller's
//! lifecycle and stale-message handling, and the error-line exporter.

mod export_tests;
mod fixtures;
