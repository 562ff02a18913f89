//! Port contracts for the upload gate.

pub mod submitter;

pub use submitter::{JobSubmitter, SubmitterError, SubmitterResult};
