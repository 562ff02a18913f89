//! Domain model for forwarding validated files.

mod ids;
mod upload;

pub use ids::JobId;
pub use upload::{FileUpload, SubmissionReceipt};
