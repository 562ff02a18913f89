//! Upload gate for validated files.
//!
//! A file is forwarded to the external job-submission service only after a
//! validation session completed with no errors. The service itself is a
//! collaborator reached through the [`ports::JobSubmitter`] port:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The gate service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
