//! Orchestration services for the upload gate.

pub mod gate;

pub use gate::{UploadError, UploadGate, UploadResult, prepare_upload};
